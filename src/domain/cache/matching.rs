//! Predicates for selecting cache records

use super::entity::{CacheRecord, RecordId};
use crate::domain::exchange::HttpRequest;

/// Boolean test over cache records
pub type RecordPredicate = Box<dyn Fn(&CacheRecord) -> bool + Send + Sync>;

/// Matches records captured for the same endpoint and method as `request`.
///
/// Comparison is exact string equality on both fields. No URI normalization
/// is applied, so requests differing only in a trailing slash or query
/// parameter order select different records. A missing request matches
/// nothing.
pub fn request_matcher(request: Option<&HttpRequest>) -> RecordPredicate {
    let Some(request) = request else {
        return Box::new(|_| false);
    };

    let url = request.url.clone();
    let method = request.method.clone();
    Box::new(move |record| record.endpoint == url && record.method == method)
}

/// Matches the record with the given store identity
pub fn id_matcher(id: &RecordId) -> RecordPredicate {
    let id = id.clone();
    Box::new(move |record| record.id.as_ref() == Some(&id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_for(method: &str, endpoint: &str) -> CacheRecord {
        CacheRecord {
            endpoint: endpoint.to_string(),
            method: method.to_string(),
            ..CacheRecord::default()
        }
    }

    #[test]
    fn test_matches_on_endpoint_and_method() {
        let request = HttpRequest::get("http://example.com");
        let matches = request_matcher(Some(&request));

        assert!(matches(&record_for("GET", "http://example.com")));
    }

    #[test]
    fn test_does_not_match_when_method_differs() {
        let request = HttpRequest::get("http://example.com");
        let matches = request_matcher(Some(&request));

        assert!(!matches(&record_for("DELETE", "http://example.com")));
    }

    #[test]
    fn test_does_not_match_when_endpoint_differs() {
        let request = HttpRequest::get("http://example.com");
        let matches = request_matcher(Some(&request));

        assert!(!matches(&record_for("GET", "http://anotherexample.com")));
    }

    #[test]
    fn test_does_not_match_without_a_request() {
        let matches = request_matcher(None);

        assert!(!matches(&record_for("GET", "http://example.com")));
    }

    #[test]
    fn test_comparison_is_exact() {
        let request = HttpRequest::get("http://example.com/path");
        let matches = request_matcher(Some(&request));

        assert!(!matches(&record_for("GET", "http://example.com/path/")));
        assert!(!matches(&record_for("get", "http://example.com/path")));
    }

    #[test]
    fn test_id_matcher_selects_by_identity() {
        let id = RecordId::new("record-1");
        let matches = id_matcher(&id);

        let mut record = record_for("GET", "http://example.com");
        record.id = Some(RecordId::new("record-1"));
        assert!(matches(&record));

        record.id = Some(RecordId::new("record-2"));
        assert!(!matches(&record));

        record.id = None;
        assert!(!matches(&record));
    }
}
