//! In-memory SaveSlotStore implementation.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::repository::{RepositoryError, Result, SaveField, SaveRecord, SaveSlot, SaveSlotStore};

/// In-memory implementation of SaveSlotStore.
#[derive(Default)]
pub struct InMemorySaveStore {
    records: RwLock<BTreeMap<SaveSlot, SaveRecord>>,
}

impl InMemorySaveStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SaveSlotStore for InMemorySaveStore {
    async fn query(&self, slot: SaveSlot) -> Result<Option<SaveRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.get(&slot).cloned())
    }

    async fn update(&self, slot: SaveSlot, field: SaveField) -> Result<SaveRecord> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let record = records
            .entry(slot)
            .or_insert_with(|| SaveRecord::new(slot));
        record.apply(field);
        Ok(record.clone())
    }

    async fn delete(&self, slot: SaveSlot) -> Result<bool> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.remove(&slot).is_some())
    }
}
