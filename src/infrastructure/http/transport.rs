//! HTTP transport trait and the reqwest-backed implementation

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::{DomainError, Headers, HttpRequest, HttpResponse};

/// Trait for the underlying HTTP call (for decorating and mocking).
///
/// Implementations attach the request's descriptor to the response they
/// return, so the caching layer can key the capture.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(
        &self,
        request: HttpRequest,
        cancel: CancellationToken,
    ) -> Result<HttpResponse, DomainError>;
}

/// Real transport using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: std::time::Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        request: HttpRequest,
        cancel: CancellationToken,
    ) -> Result<HttpResponse, DomainError> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes()).map_err(|_| {
            DomainError::invalid_request(format!("Invalid HTTP method: {}", request.method))
        })?;
        let url = reqwest::Url::parse(&request.url).map_err(|e| {
            DomainError::invalid_request(format!("Invalid URL '{}': {}", request.url, e))
        })?;

        let descriptor = request.descriptor();

        let mut builder = self.client.request(method, url);
        for (name, values) in request.headers.iter() {
            for value in values {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = tokio::select! {
            _ = cancel.cancelled() => {
                return Err(DomainError::cancelled(format!(
                    "Request to {} was cancelled",
                    descriptor.url
                )));
            }
            result = builder.send() => {
                result.map_err(|e| DomainError::transport(format!("Request failed: {}", e)))?
            }
        };

        let status = response.status().as_u16();
        let mut headers = Headers::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers.insert(name.as_str(), value);
            }
        }

        // reqwest surfaces neither reason phrases nor HTTP/1.1 trailers;
        // the canonical phrase fills in downstream and trailers stay empty
        let body = tokio::select! {
            _ = cancel.cancelled() => {
                return Err(DomainError::cancelled(format!(
                    "Request to {} was cancelled",
                    descriptor.url
                )));
            }
            result = response.text() => {
                result.map_err(|e| {
                    DomainError::transport(format!("Failed to read response body: {}", e))
                })?
            }
        };

        let mut out = HttpResponse::new(status);
        out.headers = headers;
        out.body = body;
        out.request = Some(descriptor);
        Ok(out)
    }
}
