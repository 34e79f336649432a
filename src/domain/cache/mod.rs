//! Response caching core: records, matching, lookup and store-back

mod codec;
mod entity;
mod matching;
mod repository;
mod resolver;

pub use entity::{CacheRecord, RecordId};
pub use matching::{id_matcher, request_matcher, RecordPredicate};
pub use repository::RecordRepository;
pub use resolver::{CacheOutcome, CacheResolver, RecordCacheResolver};

#[cfg(test)]
pub use repository::MockRecordRepository;
#[cfg(test)]
pub use resolver::MockCacheResolver;
