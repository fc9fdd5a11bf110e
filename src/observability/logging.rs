//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for embedding applications and tests
//! - Respect RUST_LOG, falling back to the provided default filter
//!
//! # Design Decisions
//! - The library itself only emits `tracing` events; installing a
//!   subscriber is opt-in
//! - Safe to call more than once; later calls are no-ops

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a formatting subscriber with an env-filter.
///
/// `default_filter` is used when RUST_LOG is unset, e.g.
/// `"failover_client=debug"`.
pub fn init(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
