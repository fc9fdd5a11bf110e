//! Production transport backed by reqwest.
//!
//! # Responsibilities
//! - Serialize parameters (GET → query string, POST → urlencoded form body)
//! - Enforce connect and request timeouts from configuration
//! - Map HTTP-client failures onto the transport error taxonomy

use std::error::Error as _;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::config::ClientConfig;
use crate::transport::adapter::Transport;
use crate::transport::types::{Method, Params, TransportError, TransportResult};

/// HTTP transport over a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport from client configuration.
    pub fn new(config: &ClientConfig) -> TransportResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn perform(&self, method: Method, url: &str, params: &Params) -> TransportResult<Bytes> {
        let parsed = parse_url(url)?;

        let request = match method {
            Method::Get => self.client.get(parsed).query(params.pairs()),
            Method::Post => self.client.post(parsed).form(params.pairs()),
        };

        let response = request
            .send()
            .await
            .map_err(|e| classify_send_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.bytes().await.map_err(|e| TransportError::Body {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

fn parse_url(url: &str) -> TransportResult<Url> {
    let parsed: Url = url.parse().map_err(|e: url::ParseError| TransportError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(TransportError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

fn classify_send_error(url: &str, err: &reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::Timeout {
            url: url.to_string(),
        };
    }
    if err.is_connect() {
        if is_dns_failure(err) {
            return TransportError::HostNotFound {
                url: url.to_string(),
            };
        }
        return TransportError::Connect {
            url: url.to_string(),
            reason: innermost_message(err),
        };
    }
    TransportError::Request {
        url: url.to_string(),
        reason: innermost_message(err),
    }
}

/// hyper reports resolver failures as a nested "dns error" cause; that
/// message is the only stable marker separating a missing host from a
/// refused connection.
fn is_dns_failure(err: &reqwest::Error) -> bool {
    let mut source = err.source();
    while let Some(cause) = source {
        if cause.to_string().contains("dns error") {
            return true;
        }
        source = cause.source();
    }
    false
}

/// The innermost cause reads better in logs than the full error chain.
fn innermost_message(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message = cause.to_string();
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_accepts_http_and_https() {
        assert!(parse_url("http://en.m.wikipedia.org/w/api.php").is_ok());
        assert!(parse_url("https://en.wikipedia.org/w/api.php").is_ok());
    }

    #[test]
    fn test_parse_url_rejects_malformed_input() {
        let err = parse_url("").unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl { .. }));

        let err = parse_url("not a url").unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl { .. }));
    }

    #[test]
    fn test_parse_url_rejects_unsupported_scheme() {
        let err = parse_url("ftp://example.org/file").unwrap_err();
        match err {
            TransportError::InvalidUrl { reason, .. } => {
                assert!(reason.contains("unsupported scheme"))
            }
            other => panic!("expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn test_transport_construction() {
        let transport = HttpTransport::new(&ClientConfig::default());
        assert!(transport.is_ok());
    }
}
