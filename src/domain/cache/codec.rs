//! Mapping between live responses and persisted records

use chrono::{Duration, Utc};

use super::entity::CacheRecord;
use crate::domain::error::DomainError;
use crate::domain::exchange::{Headers, HttpResponse, RequestDescriptor};

impl CacheRecord {
    /// Captures a response into a storable record expiring `ttl` from now.
    ///
    /// A response without an originating request has nothing to match
    /// against later and maps to the empty record; its expiry is left
    /// unstamped.
    pub fn from_response(response: &HttpResponse, ttl: Duration) -> Result<Self, DomainError> {
        let Some(descriptor) = response.request.as_ref() else {
            return Ok(Self::default());
        };

        let headers = Self::encode_headers(&response.headers)?;
        let trailing_headers = Self::encode_headers(&response.trailers)?;

        Ok(Self {
            id: None,
            endpoint: descriptor.url.clone(),
            method: descriptor.method.clone(),
            status_code: response.status,
            reason_phrase: response.resolved_reason().map(str::to_string),
            headers,
            trailing_headers: Some(trailing_headers),
            content: Some(response.body.clone()),
            expires_at: Utc::now() + ttl,
        })
    }

    /// Rebuilds a response from this record.
    ///
    /// The header collections attached to the result are the ones supplied
    /// by the caller, not the record's own serialized payloads: the hit path
    /// hands over the live request's headers, the post-store path the
    /// original response's.
    pub fn to_response(&self, headers: Headers, trailers: Option<Headers>) -> HttpResponse {
        let mut response = HttpResponse::new(self.status_code);
        response.reason = self.reason_phrase.clone();
        response.headers = headers;
        response.trailers = trailers.unwrap_or_default();
        response.body = self.content.clone().unwrap_or_default();
        response.request = Some(RequestDescriptor::new(
            self.method.clone(),
            self.endpoint.clone(),
        ));
        response
    }

    fn encode_headers(headers: &Headers) -> Result<String, DomainError> {
        serde_json::to_string(headers)
            .map_err(|e| DomainError::serialization(format!("Failed to encode headers: {}", e)))
    }
}
