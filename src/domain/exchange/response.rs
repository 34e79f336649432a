//! Response model

use super::{canonical_reason, Headers, RequestDescriptor};

/// An HTTP response as seen by the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,

    /// Explicit reason phrase; absent means the canonical one applies
    pub reason: Option<String>,

    pub headers: Headers,
    pub trailers: Headers,
    pub body: String,

    /// The request that produced this response, when known
    pub request: Option<RequestDescriptor>,
}

impl HttpResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            reason: None,
            headers: Headers::new(),
            trailers: Headers::new(),
            body: String::new(),
            request: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_trailer(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.trailers.insert(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_request(mut self, request: RequestDescriptor) -> Self {
        self.request = Some(request);
        self
    }

    /// The explicit reason phrase, or the canonical one for the status code
    pub fn resolved_reason(&self) -> Option<&str> {
        self.reason
            .as_deref()
            .or_else(|| canonical_reason(self.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_reason_wins() {
        let response = HttpResponse::new(202).with_reason("OK");
        assert_eq!(response.resolved_reason(), Some("OK"));
    }

    #[test]
    fn test_reason_falls_back_to_canonical() {
        let response = HttpResponse::new(202);
        assert_eq!(response.resolved_reason(), Some("Accepted"));
    }

    #[test]
    fn test_no_reason_for_unknown_status() {
        let response = HttpResponse::new(0);
        assert_eq!(response.resolved_reason(), None);
    }

    #[test]
    fn test_builders() {
        let response = HttpResponse::new(200)
            .with_header("Content-Type", "text/plain")
            .with_trailer("X-Checksum", "abc")
            .with_body("hello")
            .with_request(RequestDescriptor::new("GET", "http://example.com"));

        assert_eq!(response.headers.get("Content-Type"), Some("text/plain"));
        assert_eq!(response.trailers.get("X-Checksum"), Some("abc"));
        assert_eq!(response.body, "hello");
        assert!(response.request.is_some());
    }
}
