//! Fallback subsystem.
//!
//! # Data Flow
//! ```text
//! dispatch(intent, callbacks):
//!     → orchestrator.rs (attempt 1 against the primary URL)
//!     → On failure: classifier.rs (is this a recognized mobile rejection?)
//!         ineligible → on_failure with the original error, terminal
//!         eligible   → attempt 2 against the secondary URL,
//!                      on_retry fires first, then attempt 2's own outcome
//!     → handle.rs (live-attempt slot, cancellation)
//!     → future.rs (optional single-resolution adapter over the callbacks)
//! ```
//!
//! # Design Decisions
//! - At most two attempts, strictly primary then secondary, never more
//! - Only structural mobile-endpoint rejections trigger a fallback;
//!   transient errors surface unchanged
//! - Cancellation silences the operation: no terminal callback fires

pub mod classifier;
pub mod future;
pub mod handle;
pub mod orchestrator;

pub use classifier::is_eligible_for_fallback;
pub use future::{Promise, ResponseFuture};
pub use handle::{AttemptHandle, OperationHandle, Target};
pub use orchestrator::{dispatch, RequestIntent};
