//! Fallback orchestration state machine.
//!
//! # Data Flow
//! ```text
//! dispatch(intent, on_retry, on_success, on_failure)
//!     → attempt 1 against primary_url
//!         success    → on_success(handle1, body), terminal
//!         ineligible → on_failure(handle1, original error), terminal
//!         eligible   → attempt 2 against secondary_url, slot rebound,
//!                      on_retry(handle2, original error) fires first
//!             success → on_success(handle2, body), terminal
//!             failure → on_failure(handle2, attempt 2's error), terminal
//! ```
//!
//! # Design Decisions
//! - One spawned task per operation; no state is shared between operations
//! - The live-attempt slot is rebound before on_retry fires, so the retry
//!   callback always observes a cancellable second attempt
//! - A cancelled attempt settles nothing: no callback, no state transition

use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::fallback::classifier;
use crate::fallback::handle::{AttemptHandle, AttemptSlot, OperationHandle, Target};
use crate::observability::metrics;
use crate::transport::{Method, Params, Transport, TransportError};

/// Immutable description of one logical request.
///
/// The same `params` value is serialized for both attempts; nothing is
/// mutated or re-derived between them.
#[derive(Debug, Clone)]
pub struct RequestIntent {
    pub method: Method,
    pub primary_url: String,
    pub secondary_url: String,
    pub params: Params,
}

impl RequestIntent {
    pub fn url_for(&self, target: Target) -> &str {
        match target {
            Target::Primary => &self.primary_url,
            Target::Secondary => &self.secondary_url,
        }
    }
}

/// Fallback notification: a second attempt was issued, carrying its handle
/// and the error that triggered the retry.
pub type RetryCallback = Box<dyn FnOnce(AttemptHandle, TransportError) + Send>;

/// Terminal success notification.
pub type SuccessCallback = Box<dyn FnOnce(AttemptHandle, Bytes) + Send>;

/// Terminal failure notification, carrying the last attempt's error.
pub type FailureCallback = Box<dyn FnOnce(AttemptHandle, TransportError) + Send>;

enum Settled {
    Success(Bytes),
    Failure(TransportError),
    Cancelled,
}

impl Settled {
    fn label(&self) -> &'static str {
        match self {
            Settled::Success(_) => "success",
            Settled::Failure(_) => "failure",
            Settled::Cancelled => "cancelled",
        }
    }
}

/// Issue `intent` against its primary URL, falling back once to the
/// secondary URL on an eligible failure.
///
/// Returns immediately with a handle bound to the live attempt. Unless the
/// operation is cancelled, exactly one of `on_success`/`on_failure` is
/// invoked, exactly once; `on_retry` is invoked at most once, before the
/// second attempt's outcome is known, and never after a terminal callback.
pub fn dispatch<T>(
    transport: Arc<T>,
    intent: RequestIntent,
    on_retry: RetryCallback,
    on_success: SuccessCallback,
    on_failure: FailureCallback,
) -> OperationHandle
where
    T: Transport + ?Sized,
{
    let op_id = Uuid::new_v4();
    let (primary_handle, primary_cancel) = AttemptHandle::new(Target::Primary);
    let slot = AttemptSlot::new(primary_handle.clone());
    let operation = OperationHandle::new(op_id, slot.clone());

    tokio::spawn(async move {
        match run_attempt(&*transport, &intent, Target::Primary, op_id, primary_cancel).await {
            Settled::Cancelled => {}
            Settled::Success(body) => on_success(primary_handle, body),
            Settled::Failure(error) => {
                if !classifier::is_eligible_for_fallback(&error) {
                    tracing::debug!(
                        op_id = %op_id,
                        error = %error,
                        "Primary failure not eligible for fallback"
                    );
                    on_failure(primary_handle, error);
                    return;
                }

                let (secondary_handle, secondary_cancel) = AttemptHandle::new(Target::Secondary);
                slot.rebind(secondary_handle.clone());
                tracing::info!(
                    op_id = %op_id,
                    url = %intent.secondary_url,
                    error = %error,
                    "Primary endpoint rejected request, falling back to secondary"
                );
                metrics::record_fallback();
                on_retry(secondary_handle.clone(), error);

                match run_attempt(&*transport, &intent, Target::Secondary, op_id, secondary_cancel)
                    .await
                {
                    Settled::Cancelled => {}
                    Settled::Success(body) => on_success(secondary_handle, body),
                    Settled::Failure(second_error) => on_failure(secondary_handle, second_error),
                }
            }
        }
    });

    operation
}

async fn run_attempt<T>(
    transport: &T,
    intent: &RequestIntent,
    target: Target,
    op_id: Uuid,
    mut cancel: broadcast::Receiver<()>,
) -> Settled
where
    T: Transport + ?Sized,
{
    let url = intent.url_for(target);
    tracing::debug!(
        op_id = %op_id,
        target = %target,
        method = %intent.method,
        url = %url,
        "Issuing attempt"
    );
    metrics::record_attempt(target);
    let started = Instant::now();

    let settled = tokio::select! {
        outcome = transport.perform(intent.method, url, &intent.params) => match outcome {
            Ok(body) => Settled::Success(body),
            Err(error) => Settled::Failure(error),
        },
        _ = cancel.recv() => Settled::Cancelled,
    };

    metrics::record_attempt_outcome(target, settled.label(), started);
    match &settled {
        Settled::Success(body) => {
            tracing::debug!(op_id = %op_id, target = %target, bytes = body.len(), "Attempt succeeded");
        }
        Settled::Failure(error) => {
            tracing::debug!(op_id = %op_id, target = %target, error = %error, "Attempt failed");
        }
        Settled::Cancelled => {
            tracing::debug!(op_id = %op_id, target = %target, "Attempt cancelled");
        }
    }
    settled
}
