//! Cache lookup and store-back around a request

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;

use super::entity::CacheRecord;
use super::matching::{id_matcher, request_matcher};
use super::repository::RecordRepository;
use crate::domain::error::DomainError;
use crate::domain::exchange::{HttpRequest, HttpResponse};

#[cfg(test)]
use mockall::automock;

/// Result of consulting the cache before a request goes out
#[derive(Debug, PartialEq, Eq)]
pub enum CacheOutcome {
    /// No matching record exists
    Miss,

    /// A fresh record matched; its reconstruction replaces the live call
    Hit(HttpResponse),

    /// A matching record had expired and was evicted. The reconstruction
    /// is carried for interface parity with `Hit` but callers treat this
    /// as a miss.
    Stale(HttpResponse),
}

impl CacheOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            Self::Hit(response) | Self::Stale(response) => Some(response),
            Self::Miss => None,
        }
    }

    pub fn into_response(self) -> Option<HttpResponse> {
        match self {
            Self::Hit(response) | Self::Stale(response) => Some(response),
            Self::Miss => None,
        }
    }
}

/// Decides whether a request can be served from cache and captures
/// responses for future replay
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CacheResolver: Send + Sync {
    /// Consults the cache for the outgoing request, evicting a stale match
    async fn before_request(&self, request: &HttpRequest) -> Result<CacheOutcome, DomainError>;

    /// Persists the live response and returns its canonical reconstruction
    async fn after_request(&self, response: HttpResponse) -> Result<HttpResponse, DomainError>;
}

/// Resolver backed by a record repository with a fixed time-to-live
pub struct RecordCacheResolver {
    repository: Arc<dyn RecordRepository>,
    ttl: Duration,
}

impl RecordCacheResolver {
    pub fn new(repository: Arc<dyn RecordRepository>, seconds_to_live: i64) -> Self {
        Self {
            repository,
            ttl: Duration::seconds(seconds_to_live),
        }
    }
}

#[async_trait]
impl CacheResolver for RecordCacheResolver {
    async fn before_request(&self, request: &HttpRequest) -> Result<CacheOutcome, DomainError> {
        let existing = self
            .repository
            .find_one(request_matcher(Some(request)))
            .await?;

        let Some(record) = existing else {
            return Ok(CacheOutcome::Miss);
        };

        if !record.is_expired_at(Utc::now()) {
            return Ok(CacheOutcome::Hit(
                record.to_response(request.headers.clone(), None),
            ));
        }

        // A record that was never persisted has no identity to delete by
        if let Some(id) = &record.id {
            self.repository.remove(id_matcher(id)).await?;
        }

        Ok(CacheOutcome::Stale(
            record.to_response(request.headers.clone(), None),
        ))
    }

    async fn after_request(&self, response: HttpResponse) -> Result<HttpResponse, DomainError> {
        let record = CacheRecord::from_response(&response, self.ttl)?;
        let persisted = self.repository.create(record).await?;

        Ok(persisted.to_response(response.headers, Some(response.trailers)))
    }
}
