//! Record repository trait

use async_trait::async_trait;

use super::entity::CacheRecord;
use super::matching::RecordPredicate;
use crate::domain::error::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository for cache record persistence.
///
/// Implementations must preserve insertion order in `list`; everything else
/// builds on that ordering.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Lists all records in insertion order
    async fn list(&self) -> Result<Vec<CacheRecord>, DomainError>;

    /// Inserts a record and returns it as persisted, with its identity
    /// assigned. Callers treat the returned value as canonical.
    async fn create(&self, record: CacheRecord) -> Result<CacheRecord, DomainError>;

    /// Removes the first record matching the predicate, if any. Further
    /// matches are left in place.
    async fn remove(&self, predicate: RecordPredicate) -> Result<(), DomainError>;

    /// Finds the most recently inserted record matching the predicate.
    ///
    /// Overriding implementations must keep the last-match-wins tie-break.
    async fn find_one(
        &self,
        predicate: RecordPredicate,
    ) -> Result<Option<CacheRecord>, DomainError> {
        let records = self.list().await?;
        Ok(records.into_iter().rev().find(|record| predicate(record)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::matching::request_matcher;
    use crate::domain::exchange::HttpRequest;

    struct ListOnlyRepository {
        records: Vec<CacheRecord>,
    }

    #[async_trait]
    impl RecordRepository for ListOnlyRepository {
        async fn list(&self) -> Result<Vec<CacheRecord>, DomainError> {
            Ok(self.records.clone())
        }

        async fn create(&self, record: CacheRecord) -> Result<CacheRecord, DomainError> {
            Ok(record)
        }

        async fn remove(&self, _predicate: RecordPredicate) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn record_for(method: &str, endpoint: &str, content: &str) -> CacheRecord {
        CacheRecord {
            endpoint: endpoint.to_string(),
            method: method.to_string(),
            content: Some(content.to_string()),
            ..CacheRecord::default()
        }
    }

    #[tokio::test]
    async fn test_find_one_returns_last_match_in_insertion_order() {
        let repository = ListOnlyRepository {
            records: vec![
                record_for("GET", "http://example.com", "first"),
                record_for("POST", "http://example.com", "other"),
                record_for("GET", "http://example.com", "second"),
            ],
        };

        let request = HttpRequest::get("http://example.com");
        let found = repository
            .find_one(request_matcher(Some(&request)))
            .await
            .unwrap();

        assert_eq!(found.unwrap().content.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_find_one_returns_none_without_match() {
        let repository = ListOnlyRepository { records: vec![] };

        let request = HttpRequest::get("http://example.com");
        let found = repository
            .find_one(request_matcher(Some(&request)))
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_mock_repository() {
        let mut mock = MockRecordRepository::new();

        mock.expect_list().returning(|| Ok(vec![]));

        let result = mock.list().await;
        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }
}
