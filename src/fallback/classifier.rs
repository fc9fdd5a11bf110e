//! Fallback eligibility classification.
//!
//! # Responsibilities
//! - Decide whether a failed primary attempt justifies one retry against
//!   the desktop endpoint
//! - Keep the recognized set fixed and closed; unknown errors never fall
//!   back
//!
//! # Design Decisions
//! - Eligible conditions are structural rejections by the mobile endpoint
//! - Transient conditions (timeouts, connection loss, 5xx) stay ineligible:
//!   they would fail identically against the desktop endpoint

use crate::transport::{StatusCode, TransportError};

/// Statuses indicating the endpoint itself cannot serve the request: the
/// path is absent on the host, or the operation is unsupported there.
const ELIGIBLE_STATUSES: [StatusCode; 2] = [StatusCode::NOT_FOUND, StatusCode::NOT_IMPLEMENTED];

/// Returns true when `error` belongs to the fixed set of mobile-endpoint
/// rejections that justify retrying against the desktop endpoint.
pub fn is_eligible_for_fallback(error: &TransportError) -> bool {
    match error {
        // Malformed mobile URL, or a mobile host that does not exist.
        TransportError::InvalidUrl { .. } | TransportError::HostNotFound { .. } => true,
        TransportError::Status { status, .. } => ELIGIBLE_STATUSES.contains(status),
        _ => false,
    }
}
