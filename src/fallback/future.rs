//! Single-resolution future adapter over the callback contract.
//!
//! # Design Decisions
//! - Pure adapter: no orchestration logic, only terminal-outcome plumbing
//! - The retry signal is dropped; callers who need it use the callback
//!   forms
//! - No cancellation surface: dropping the future does not abort the
//!   request

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::task::{Context, Poll};

use bytes::Bytes;
use tokio::sync::oneshot;

use crate::transport::{TransportError, TransportResult};

type Settlement = TransportResult<Bytes>;

/// Write end of a single-resolution future.
///
/// Only the first settlement wins; later calls are ignored.
#[derive(Clone)]
pub struct Promise {
    tx: Arc<Mutex<Option<oneshot::Sender<Settlement>>>>,
}

impl Promise {
    pub fn new() -> (Self, ResponseFuture) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                tx: Arc::new(Mutex::new(Some(tx))),
            },
            ResponseFuture { rx },
        )
    }

    pub fn resolve(&self, body: Bytes) {
        self.settle(Ok(body));
    }

    pub fn reject(&self, error: TransportError) {
        self.settle(Err(error));
    }

    fn settle(&self, outcome: Settlement) {
        let sender = self
            .tx
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(sender) = sender {
            let _ = sender.send(outcome);
        }
    }
}

/// Future yielding the terminal outcome of one orchestrated request.
pub struct ResponseFuture {
    rx: oneshot::Receiver<Settlement>,
}

impl Future for ResponseFuture {
    type Output = Settlement;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            // the operation was dropped without settling (runtime shutdown)
            Poll::Ready(Err(_)) => Poll::Ready(Err(TransportError::Canceled)),
            Poll::Pending => Poll::Pending,
        }
    }
}
