//! In-memory record store for tests and embedding.

use std::sync::RwLock;

use context_core::errors::{ContextResult, StorageError};
use context_core::{IRecordStore, Measurement};

/// Record store held in memory. Same ordering and append-only contract as
/// [`crate::NdjsonStore`], without persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<Measurement>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing records, in order.
    pub fn with_records(records: Vec<Measurement>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IRecordStore for InMemoryStore {
    fn load(&self, subject: &str) -> ContextResult<Vec<Measurement>> {
        let records = self.records.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(records
            .iter()
            .filter(|m| m.subject == subject)
            .cloned()
            .collect())
    }

    fn load_all(&self) -> ContextResult<Vec<Measurement>> {
        let records = self.records.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(records.clone())
    }

    fn append(&self, measurement: &Measurement) -> ContextResult<()> {
        let mut records = self.records.write().map_err(|_| StorageError::LockPoisoned)?;
        records.push(measurement.clone());
        Ok(())
    }
}
