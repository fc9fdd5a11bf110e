//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Orchestrator and transport produce:
//!     → logging.rs (structured log events, operation id on every line)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → whatever subscriber/exporter the embedding application installs
//! ```
//!
//! # Design Decisions
//! - The library emits; applications install subscribers and exporters
//! - Metrics are cheap (atomic increments) and recorded unconditionally

pub mod logging;
pub mod metrics;
