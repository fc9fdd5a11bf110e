//! Attempt and operation handles.
//!
//! # Responsibilities
//! - Give callers a cancellable reference to each in-flight attempt
//! - Own the live-attempt slot that `OperationHandle::cancel` targets
//!
//! # Design Decisions
//! - Cancellation is idempotent and a no-op once an attempt has settled
//! - The slot is rebound only by the orchestrator, never by callers

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::broadcast;
use uuid::Uuid;

/// Which endpoint an attempt is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Primary,
    Secondary,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Primary => "primary",
            Target::Secondary => "secondary",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cancellable reference to one in-flight attempt.
///
/// Cancelling is safe to call any number of times, before or after the
/// attempt settles; a settled attempt ignores it.
#[derive(Clone)]
pub struct AttemptHandle {
    target: Target,
    cancel_tx: broadcast::Sender<()>,
}

impl AttemptHandle {
    pub(crate) fn new(target: Target) -> (Self, broadcast::Receiver<()>) {
        let (cancel_tx, cancel_rx) = broadcast::channel(1);
        (Self { target, cancel_tx }, cancel_rx)
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Cancel this attempt. A cancelled attempt fires no callbacks.
    pub fn cancel(&self) {
        let _ = self.cancel_tx.send(());
    }
}

impl fmt::Debug for AttemptHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttemptHandle")
            .field("target", &self.target)
            .finish()
    }
}

/// Owning cell for the currently-live attempt handle.
///
/// Updated only by the orchestrator: installed with attempt 1 at dispatch,
/// rebound to attempt 2 when a fallback begins.
pub(crate) struct AttemptSlot {
    current: Mutex<AttemptHandle>,
}

impl AttemptSlot {
    pub(crate) fn new(initial: AttemptHandle) -> Arc<Self> {
        Arc::new(Self {
            current: Mutex::new(initial),
        })
    }

    pub(crate) fn rebind(&self, handle: AttemptHandle) {
        *self.lock() = handle;
    }

    pub(crate) fn current(&self) -> AttemptHandle {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, AttemptHandle> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle to one full orchestration instance (one or two attempts).
///
/// `cancel` targets whichever attempt is live at the moment of the call:
/// the primary before a fallback, the secondary after. An [`AttemptHandle`]
/// captured from a callback refers to that specific attempt only, so a
/// primary handle held across a fallback is already stale; prefer this
/// handle, or the one delivered to `on_retry`, once a fallback may have
/// begun.
#[derive(Clone)]
pub struct OperationHandle {
    id: Uuid,
    slot: Arc<AttemptSlot>,
}

impl OperationHandle {
    pub(crate) fn new(id: Uuid, slot: Arc<AttemptSlot>) -> Self {
        Self { id, slot }
    }

    /// Unique id of this operation, as it appears in logs.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Target of the currently-live attempt.
    pub fn current_target(&self) -> Target {
        self.slot.current().target()
    }

    /// Cancel whichever attempt is currently live.
    ///
    /// A cancelled operation invokes none of its remaining callbacks.
    /// Cancelling after the operation has settled has no effect.
    pub fn cancel(&self) {
        self.slot.current().cancel();
    }
}

impl fmt::Debug for OperationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationHandle")
            .field("id", &self.id)
            .field("current_target", &self.current_target())
            .finish()
    }
}
