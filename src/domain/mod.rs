//! Domain layer - Core caching logic and entities

pub mod cache;
pub mod error;
pub mod exchange;

pub use cache::{
    id_matcher, request_matcher, CacheOutcome, CacheRecord, CacheResolver, RecordCacheResolver,
    RecordId, RecordPredicate, RecordRepository,
};
pub use error::DomainError;
pub use exchange::{canonical_reason, Headers, HttpRequest, HttpResponse, RequestDescriptor};
