//! Public request surface.
//!
//! # Data Flow
//! ```text
//! get_with_urls / post_with_urls (explicit primary + secondary URLs)
//!     → fallback::dispatch
//! get_with_site / post_with_site
//!     → site resolver (mobile = primary, desktop = secondary)
//!     → explicit form
//! get / post (future form)
//!     → site form, with callbacks adapted onto a single-resolution future
//! ```
//!
//! # Design Decisions
//! - Every entry point delegates to the one orchestrator; none duplicates
//!   the state machine
//! - The future form drops the retry signal and exposes no cancellation

use std::sync::Arc;

use bytes::Bytes;

use crate::config::ClientConfig;
use crate::fallback::future::{Promise, ResponseFuture};
use crate::fallback::handle::{AttemptHandle, OperationHandle};
use crate::fallback::orchestrator::{dispatch, RequestIntent};
use crate::site::Site;
use crate::transport::{
    HttpTransport, Method, Params, Transport, TransportError, TransportResult,
};

/// HTTP client with automatic mobile-to-desktop endpoint fallback.
///
/// Clones are cheap and share the underlying transport.
pub struct FallbackClient<T: Transport = HttpTransport> {
    transport: Arc<T>,
}

impl<T: Transport> Clone for FallbackClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
        }
    }
}

impl FallbackClient<HttpTransport> {
    /// Create a client with default configuration.
    pub fn new() -> TransportResult<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a client from configuration.
    pub fn with_config(config: &ClientConfig) -> TransportResult<Self> {
        Ok(Self {
            transport: Arc::new(HttpTransport::new(config)?),
        })
    }
}

impl<T: Transport> FallbackClient<T> {
    /// Wrap a custom transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// GET with explicit primary (mobile) and secondary (desktop) URLs.
    ///
    /// `on_retry` fires only if a fallback attempt is issued, carrying the
    /// new attempt's handle and the error that triggered the retry. Unless
    /// the operation is cancelled, exactly one of `on_success`/`on_failure`
    /// fires, with the last attempt's outcome.
    pub fn get_with_urls(
        &self,
        primary_url: impl Into<String>,
        secondary_url: impl Into<String>,
        params: Params,
        on_retry: impl FnOnce(AttemptHandle, TransportError) + Send + 'static,
        on_success: impl FnOnce(AttemptHandle, Bytes) + Send + 'static,
        on_failure: impl FnOnce(AttemptHandle, TransportError) + Send + 'static,
    ) -> OperationHandle {
        self.request_with_urls(
            Method::Get,
            primary_url.into(),
            secondary_url.into(),
            params,
            on_retry,
            on_success,
            on_failure,
        )
    }

    /// POST variant of [`get_with_urls`](Self::get_with_urls).
    pub fn post_with_urls(
        &self,
        primary_url: impl Into<String>,
        secondary_url: impl Into<String>,
        params: Params,
        on_retry: impl FnOnce(AttemptHandle, TransportError) + Send + 'static,
        on_success: impl FnOnce(AttemptHandle, Bytes) + Send + 'static,
        on_failure: impl FnOnce(AttemptHandle, TransportError) + Send + 'static,
    ) -> OperationHandle {
        self.request_with_urls(
            Method::Post,
            primary_url.into(),
            secondary_url.into(),
            params,
            on_retry,
            on_success,
            on_failure,
        )
    }

    /// GET against a site's mobile API URL, falling back to its desktop
    /// API URL.
    pub fn get_with_site(
        &self,
        site: &Site,
        params: Params,
        on_retry: impl FnOnce(AttemptHandle, TransportError) + Send + 'static,
        on_success: impl FnOnce(AttemptHandle, Bytes) + Send + 'static,
        on_failure: impl FnOnce(AttemptHandle, TransportError) + Send + 'static,
    ) -> OperationHandle {
        let endpoints = site.resolve();
        self.request_with_urls(
            Method::Get,
            endpoints.mobile,
            endpoints.desktop,
            params,
            on_retry,
            on_success,
            on_failure,
        )
    }

    /// POST variant of [`get_with_site`](Self::get_with_site).
    pub fn post_with_site(
        &self,
        site: &Site,
        params: Params,
        on_retry: impl FnOnce(AttemptHandle, TransportError) + Send + 'static,
        on_success: impl FnOnce(AttemptHandle, Bytes) + Send + 'static,
        on_failure: impl FnOnce(AttemptHandle, TransportError) + Send + 'static,
    ) -> OperationHandle {
        let endpoints = site.resolve();
        self.request_with_urls(
            Method::Post,
            endpoints.mobile,
            endpoints.desktop,
            params,
            on_retry,
            on_success,
            on_failure,
        )
    }

    /// Future form of [`get_with_site`](Self::get_with_site): resolves with
    /// the success body, rejects with the terminal error.
    ///
    /// The retry signal is dropped and no cancellation handle is exposed;
    /// dropping the returned future does not abort the request.
    pub fn get(&self, site: &Site, params: Params) -> ResponseFuture {
        self.request_site_future(Method::Get, site, params)
    }

    /// Future form of [`post_with_site`](Self::post_with_site).
    pub fn post(&self, site: &Site, params: Params) -> ResponseFuture {
        self.request_site_future(Method::Post, site, params)
    }

    #[allow(clippy::too_many_arguments)]
    fn request_with_urls(
        &self,
        method: Method,
        primary_url: String,
        secondary_url: String,
        params: Params,
        on_retry: impl FnOnce(AttemptHandle, TransportError) + Send + 'static,
        on_success: impl FnOnce(AttemptHandle, Bytes) + Send + 'static,
        on_failure: impl FnOnce(AttemptHandle, TransportError) + Send + 'static,
    ) -> OperationHandle {
        let intent = RequestIntent {
            method,
            primary_url,
            secondary_url,
            params,
        };
        dispatch(
            self.transport.clone(),
            intent,
            Box::new(on_retry),
            Box::new(on_success),
            Box::new(on_failure),
        )
    }

    fn request_site_future(&self, method: Method, site: &Site, params: Params) -> ResponseFuture {
        let (promise, future) = Promise::new();
        let resolve = promise.clone();
        let reject = promise;
        let on_retry = |_handle: AttemptHandle, _error: TransportError| {};
        let on_success = move |_handle: AttemptHandle, body: Bytes| resolve.resolve(body);
        let on_failure = move |_handle: AttemptHandle, error: TransportError| reject.reject(error);
        match method {
            Method::Get => self.get_with_site(site, params, on_retry, on_success, on_failure),
            Method::Post => self.post_with_site(site, params, on_retry, on_success, on_failure),
        };
        future
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::transport::StatusCode;

    /// Mock transport answering by URL.
    struct RoutedTransport {
        routes: HashMap<String, Result<&'static str, u16>>,
        hits: Mutex<Vec<String>>,
    }

    impl RoutedTransport {
        fn new(routes: impl IntoIterator<Item = (&'static str, Result<&'static str, u16>)>) -> Self {
            Self {
                routes: routes
                    .into_iter()
                    .map(|(url, outcome)| (url.to_string(), outcome))
                    .collect(),
                hits: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for RoutedTransport {
        async fn perform(
            &self,
            _method: Method,
            url: &str,
            _params: &Params,
        ) -> TransportResult<Bytes> {
            self.hits.lock().unwrap().push(url.to_string());
            match self.routes.get(url) {
                Some(Ok(body)) => Ok(Bytes::from_static(body.as_bytes())),
                Some(Err(code)) => Err(TransportError::Status {
                    url: url.to_string(),
                    status: StatusCode::from_u16(*code).unwrap(),
                }),
                None => Err(TransportError::HostNotFound {
                    url: url.to_string(),
                }),
            }
        }
    }

    fn site() -> Site {
        Site::new("en", "wikipedia.org").unwrap()
    }

    #[tokio::test]
    async fn test_future_form_resolves_with_desktop_body_after_fallback() {
        let client = FallbackClient::with_transport(RoutedTransport::new([
            ("https://en.m.wikipedia.org/w/api.php", Err(404)),
            ("https://en.wikipedia.org/w/api.php", Ok("{\"ok\":true}")),
        ]));

        let body = client
            .get(&site(), Params::new().with("action", "query"))
            .await
            .unwrap();
        assert_eq!(&body[..], b"{\"ok\":true}");
    }

    #[tokio::test]
    async fn test_future_form_rejects_with_ineligible_error() {
        let client = FallbackClient::with_transport(RoutedTransport::new([
            ("https://en.m.wikipedia.org/w/api.php", Err(503)),
            ("https://en.wikipedia.org/w/api.php", Ok("{\"ok\":true}")),
        ]));

        let error = client.post(&site(), Params::new()).await.unwrap_err();
        assert_eq!(error.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    }

    #[tokio::test]
    async fn test_site_form_targets_resolved_urls() {
        let transport = RoutedTransport::new([
            ("https://en.m.wikipedia.org/w/api.php", Ok("mobile body")),
        ]);
        let client = FallbackClient::with_transport(transport);

        let body = client.get(&site(), Params::new()).await.unwrap();
        assert_eq!(&body[..], b"mobile body");

        let hits = client.transport.hits.lock().unwrap().clone();
        assert_eq!(hits, vec!["https://en.m.wikipedia.org/w/api.php"]);
    }
}
