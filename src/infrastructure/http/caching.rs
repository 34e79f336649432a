//! Transport decorator that replays cached responses

use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use super::events::{CacheEvents, TracingCacheEvents};
use super::transport::HttpTransport;
use crate::domain::{CacheOutcome, CacheResolver, DomainError, HttpRequest, HttpResponse};

/// Transport wrapper that consults the cache before forwarding a request
/// and captures the response afterwards.
///
/// On a hit the inner transport is never touched. Every forwarded response
/// is persisted, and the caller receives its canonical reconstruction
/// rather than the raw transport response.
pub struct CachingTransport<T: HttpTransport> {
    inner: T,
    resolver: Arc<dyn CacheResolver>,
    events: Arc<dyn CacheEvents>,
}

impl<T: HttpTransport> CachingTransport<T> {
    pub fn new(inner: T, resolver: Arc<dyn CacheResolver>) -> Self {
        Self {
            inner,
            resolver,
            events: Arc::new(TracingCacheEvents),
        }
    }

    pub fn with_events(
        inner: T,
        resolver: Arc<dyn CacheResolver>,
        events: Arc<dyn CacheEvents>,
    ) -> Self {
        Self {
            inner,
            resolver,
            events,
        }
    }
}

#[async_trait]
impl<T: HttpTransport> HttpTransport for CachingTransport<T> {
    async fn send(
        &self,
        request: HttpRequest,
        cancel: CancellationToken,
    ) -> Result<HttpResponse, DomainError> {
        if let CacheOutcome::Hit(cached) = self.resolver.before_request(&request).await? {
            self.events.hit(&request.method, &request.url);
            return Ok(cached);
        }

        let response = self.inner.send(request, cancel).await?;
        let stored = self.resolver.after_request(response).await?;

        if let Some(descriptor) = &stored.request {
            self.events.stored(&descriptor.method, &descriptor.url);
        }

        Ok(stored)
    }
}
