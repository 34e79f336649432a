//! HTTP infrastructure - transports and the caching decorator

mod caching;
mod events;
mod transport;

pub use caching::CachingTransport;
pub use events::{CacheEvents, TracingCacheEvents};
pub use transport::{HttpTransport, ReqwestTransport};

#[cfg(test)]
pub use events::mock::RecordingCacheEvents;
#[cfg(test)]
pub use transport::mock::MockTransport;
