//! Logical site to endpoint URL resolution.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for structurally invalid site components.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SiteError {
    #[error("site language must not be empty")]
    EmptyLanguage,

    #[error("site domain must not be empty")]
    EmptyDomain,

    #[error("invalid character '{1}' in site {0}")]
    InvalidCharacter(&'static str, char),
}

/// A logical wiki site, addressed by language subdomain and project domain.
///
/// `Site::new("en", "wikipedia.org")` resolves to the mobile host
/// `en.m.wikipedia.org` and the desktop host `en.wikipedia.org`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Site {
    language: String,
    domain: String,
}

/// Mobile and desktop API URLs for one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPair {
    pub mobile: String,
    pub desktop: String,
}

impl Site {
    /// Create a site, validating both components structurally.
    pub fn new(language: impl Into<String>, domain: impl Into<String>) -> Result<Self, SiteError> {
        let language = language.into();
        let domain = domain.into();
        if language.is_empty() {
            return Err(SiteError::EmptyLanguage);
        }
        if domain.is_empty() {
            return Err(SiteError::EmptyDomain);
        }
        if let Some(c) = language.chars().find(|c| !is_host_char(*c)) {
            return Err(SiteError::InvalidCharacter("language", c));
        }
        if let Some(c) = domain.chars().find(|c| !is_host_char(*c) && *c != '.') {
            return Err(SiteError::InvalidCharacter("domain", c));
        }
        Ok(Self { language, domain })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// API URL on the mobile host (`{language}.m.{domain}`).
    pub fn mobile_api_url(&self) -> String {
        format!("https://{}.m.{}/w/api.php", self.language, self.domain)
    }

    /// API URL on the canonical desktop host.
    pub fn desktop_api_url(&self) -> String {
        format!("https://{}.{}/w/api.php", self.language, self.domain)
    }

    /// Resolve to the (mobile, desktop) pair used by the fallback surface.
    pub fn resolve(&self) -> EndpointPair {
        EndpointPair {
            mobile: self.mobile_api_url(),
            desktop: self.desktop_api_url(),
        }
    }
}

fn is_host_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.language, self.domain)
    }
}
