//! In-memory record repository

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::{CacheRecord, DomainError, RecordId, RecordPredicate, RecordRepository};

/// In-memory implementation of RecordRepository.
///
/// Records are kept in insertion order, which `find_one`'s tie-break
/// depends on. Suitable for tests and single-process use.
pub struct InMemoryRecordRepository {
    records: RwLock<Vec<CacheRecord>>,
}

impl InMemoryRecordRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Seeds a record, assigning an identity if absent
    pub fn with_record(self, mut record: CacheRecord) -> Self {
        if record.id.is_none() {
            record.id = Some(RecordId::generate());
        }
        if let Ok(mut records) = self.records.write() {
            records.push(record);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn list(&self) -> Result<Vec<CacheRecord>, DomainError> {
        let records = self
            .records
            .read()
            .map_err(|_| DomainError::storage("Failed to acquire lock"))?;

        Ok(records.clone())
    }

    async fn create(&self, mut record: CacheRecord) -> Result<CacheRecord, DomainError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| DomainError::storage("Failed to acquire lock"))?;

        if record.id.is_none() {
            record.id = Some(RecordId::generate());
        }

        records.push(record.clone());
        Ok(record)
    }

    async fn remove(&self, predicate: RecordPredicate) -> Result<(), DomainError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| DomainError::storage("Failed to acquire lock"))?;

        if let Some(index) = records.iter().position(|record| predicate(record)) {
            records.remove(index);
        }

        Ok(())
    }
}
