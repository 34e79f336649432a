//! Cache record entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::exchange::Headers;

/// Store-assigned record identity. Opaque, never used for matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted snapshot of one HTTP response, keyed by endpoint and method.
///
/// Header collections are stored pre-serialized so the record stays a flat,
/// store-agnostic document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// Assigned by the store on create; `None` until persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    /// Target URI of the original request, exact text
    pub endpoint: String,

    /// HTTP method of the original request, exact text
    pub method: String,

    pub status_code: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_phrase: Option<String>,

    /// Response headers as a serialized name-to-values JSON object
    pub headers: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_headers: Option<String>,

    /// Response body captured as text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Absolute wall-clock expiry
    pub expires_at: DateTime<Utc>,
}

impl Default for CacheRecord {
    fn default() -> Self {
        Self {
            id: None,
            endpoint: String::new(),
            method: String::new(),
            status_code: 0,
            reason_phrase: None,
            headers: String::new(),
            trailing_headers: None,
            content: None,
            expires_at: DateTime::UNIX_EPOCH,
        }
    }
}

impl CacheRecord {
    /// A record at or past its expiry is stale
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Decodes the stored response headers
    pub fn headers(&self) -> Result<Headers, DomainError> {
        Self::decode_headers(&self.headers)
    }

    /// Decodes the stored trailing headers; `None` decodes as empty
    pub fn trailing_headers(&self) -> Result<Headers, DomainError> {
        match &self.trailing_headers {
            Some(payload) => Self::decode_headers(payload),
            None => Ok(Headers::new()),
        }
    }

    fn decode_headers(payload: &str) -> Result<Headers, DomainError> {
        if payload.is_empty() {
            return Ok(Headers::new());
        }

        serde_json::from_str(payload).map_err(|e| {
            DomainError::serialization(format!("Malformed stored header payload: {}", e))
        })
    }
}
