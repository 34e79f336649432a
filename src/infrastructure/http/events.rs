//! Cache activity notifications

use tracing::info;

/// Observer for cache activity on the request pipeline.
///
/// Injected into the caching transport so the pipeline stays agnostic of
/// the logging sink.
pub trait CacheEvents: Send + Sync {
    /// A fresh cached response replaced a live call
    fn hit(&self, method: &str, url: &str);

    /// A live response was captured for future replay
    fn stored(&self, method: &str, url: &str);
}

/// Default sink emitting tracing events
#[derive(Debug, Default)]
pub struct TracingCacheEvents;

impl CacheEvents for TracingCacheEvents {
    fn hit(&self, method: &str, url: &str) {
        info!(method = %method, url = %url, "Found cached HTTP response");
    }

    fn stored(&self, method: &str, url: &str) {
        info!(method = %method, url = %url, "Stored cached HTTP response");
    }
}
