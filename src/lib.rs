//! http-replay
//!
//! A transparent response cache for outbound HTTP clients:
//! - Captured responses are replayed for matching requests until they expire
//! - Matching is exact on method and target URI
//! - Storage and transport sit behind traits with in-memory and reqwest
//!   implementations provided

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use domain::RecordCacheResolver;
use infrastructure::cache::InMemoryRecordRepository;
use infrastructure::http::{CachingTransport, ReqwestTransport};

/// Wire the default caching pipeline around a reqwest transport
pub fn create_cached_transport(config: &AppConfig) -> CachingTransport<ReqwestTransport> {
    let repository = Arc::new(InMemoryRecordRepository::new());
    let resolver = Arc::new(RecordCacheResolver::new(
        repository,
        config.cache.seconds_to_live,
    ));

    CachingTransport::new(ReqwestTransport::new(), resolver)
}
