//! Transport-level types and error definitions.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use reqwest::StatusCode;

/// HTTP methods supported by the fallback surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered request parameters.
///
/// Serialized identically for every attempt of an operation: as a query
/// string for GET, as an urlencoded form body for POST. Pair order is
/// preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build parameters from a JSON object of scalar values.
    ///
    /// Pair order follows the object's iteration order.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ParamsError> {
        let object = value.as_object().ok_or(ParamsError::NotAnObject)?;
        let mut params = Params::new();
        for (key, value) in object {
            let rendered = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => return Err(ParamsError::NonScalar(key.clone())),
            };
            params.push(key.clone(), rendered);
        }
        Ok(params)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Errors building [`Params`] from JSON.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("parameters must be a JSON object")]
    NotAnObject,

    #[error("parameter '{0}' is not a scalar value")]
    NonScalar(String),
}

/// Errors produced by a single transport attempt.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request URL could not be parsed or uses an unsupported scheme.
    #[error("invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// DNS resolution reported that the host does not exist.
    #[error("host not found for '{url}'")]
    HostNotFound { url: String },

    /// The endpoint answered with a non-success HTTP status.
    #[error("'{url}' returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    /// The attempt exceeded the configured request timeout.
    #[error("request to '{url}' timed out")]
    Timeout { url: String },

    /// TCP or TLS connection to the endpoint failed.
    #[error("connection to '{url}' failed: {reason}")]
    Connect { url: String, reason: String },

    /// The request failed in flight for a reason other than the above.
    #[error("request to '{url}' failed: {reason}")]
    Request { url: String, reason: String },

    /// The response body could not be read.
    #[error("failed to read response body from '{url}': {reason}")]
    Body { url: String, reason: String },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(String),

    /// The operation was dropped before producing an outcome.
    #[error("request was canceled before completion")]
    Canceled,
}

impl TransportError {
    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
    }

    #[test]
    fn test_params_preserve_order() {
        let params = Params::new()
            .with("action", "query")
            .with("titles", "Main Page")
            .with("format", "json");
        let keys: Vec<&str> = params.pairs().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["action", "titles", "format"]);
    }

    #[test]
    fn test_params_from_json_object() {
        let value = serde_json::json!({
            "action": "query",
            "limit": 10,
            "redirects": true,
        });
        let params = Params::from_json(&value).unwrap();
        assert_eq!(params.len(), 3);
        assert!(params
            .pairs()
            .contains(&("limit".to_string(), "10".to_string())));
        assert!(params
            .pairs()
            .contains(&("redirects".to_string(), "true".to_string())));
    }

    #[test]
    fn test_params_from_json_rejects_non_scalars() {
        let err = Params::from_json(&serde_json::json!(["a", "b"])).unwrap_err();
        assert_eq!(err, ParamsError::NotAnObject);

        let err = Params::from_json(&serde_json::json!({"nested": {"x": 1}})).unwrap_err();
        assert_eq!(err, ParamsError::NonScalar("nested".to_string()));
    }

    #[test]
    fn test_error_display() {
        let err = TransportError::Status {
            url: "http://en.m.wikipedia.org/w/api.php".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        assert!(err.to_string().contains("404"));
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));

        let err = TransportError::Timeout {
            url: "http://example.org".to_string(),
        };
        assert!(err.to_string().contains("timed out"));
        assert_eq!(err.status(), None);
    }
}
