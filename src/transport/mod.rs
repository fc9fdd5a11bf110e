//! HTTP transport subsystem.
//!
//! # Data Flow
//! ```text
//! Request intent (method, url, params)
//!     → adapter.rs (Transport trait: one attempt = one awaitable unit)
//!     → http_client.rs (reqwest-backed production implementation)
//!     → types.rs (error taxonomy shared with the fallback classifier)
//! ```
//!
//! # Design Decisions
//! - One `perform` call is one attempt; the orchestrator owns sequencing
//! - Cancellation is dropping the in-flight future, not an error value
//! - Error variants are shaped for the fallback classifier, not for the
//!   underlying HTTP library

pub mod adapter;
pub mod http_client;
pub mod types;

pub use adapter::Transport;
pub use http_client::HttpTransport;
pub use types::{Method, Params, ParamsError, StatusCode, TransportError, TransportResult};
