//! HTTP client for https://baconipsum.com/json-api/

use tokio_util::sync::CancellationToken;

use super::request::IpsumRequest;
use crate::domain::{DomainError, HttpRequest};
use crate::infrastructure::http::HttpTransport;

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://baconipsum.com/api/";

/// Client generic over its transport, so requests can run through the
/// caching decorator
pub struct IpsumClient<T: HttpTransport> {
    transport: T,
    base_url: String,
}

impl<T: HttpTransport> IpsumClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_base_url(transport, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Fetches paragraphs of filler text
    pub async fn paragraphs(
        &self,
        request: &IpsumRequest,
        cancel: CancellationToken,
    ) -> Result<Vec<String>, DomainError> {
        let url = format!("{}{}", self.base_url, request.query_string());
        let response = self.transport.send(HttpRequest::get(url), cancel).await?;

        serde_json::from_str(&response.body).map_err(|e| {
            DomainError::serialization(format!("Failed to parse ipsum response: {}", e))
        })
    }
}
