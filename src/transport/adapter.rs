//! Transport seam consumed by the fallback orchestrator.

use async_trait::async_trait;
use bytes::Bytes;

use crate::transport::types::{Method, Params, TransportResult};

/// One HTTP attempt as an awaitable unit.
///
/// Implementations must settle exactly once per call. Dropping the returned
/// future cancels the attempt; no completion is observed afterwards.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Perform a single request and return the response body on success.
    async fn perform(&self, method: Method, url: &str, params: &Params) -> TransportResult<Bytes>;
}
