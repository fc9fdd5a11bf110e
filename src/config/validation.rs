//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0) and header-safe strings
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ClientConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::ClientConfig;

/// A single semantic configuration problem.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("request_timeout_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("connect_timeout_secs must be greater than zero")]
    ZeroConnectTimeout,

    #[error("user_agent must not be empty")]
    EmptyUserAgent,

    #[error("user_agent must not contain control characters")]
    InvalidUserAgent,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroConnectTimeout);
    }
    if config.user_agent.is_empty() {
        errors.push(ValidationError::EmptyUserAgent);
    } else if config.user_agent.chars().any(|c| c.is_control()) {
        errors.push(ValidationError::InvalidUserAgent);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
