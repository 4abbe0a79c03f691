//! Save-game metadata and active slot selection.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};

use super::error::{RepositoryError, Result};
use super::traits::SaveSlotStore;
use super::types::{SaveField, SaveRecord, SaveSlot};

/// What the load screen shows for an occupied slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveSummary {
    pub slot: SaveSlot,
    pub player_name: String,
    pub play_time_secs: u64,
    pub updated_at: DateTime<Utc>,
}

impl From<&SaveRecord> for SaveSummary {
    fn from(record: &SaveRecord) -> Self {
        Self {
            slot: record.slot,
            player_name: record.player_name.clone(),
            play_time_secs: record.play_time_secs,
            updated_at: record.updated_at,
        }
    }
}

pub struct ArchiveRepository {
    store: Arc<dyn SaveSlotStore>,
    active: RwLock<Option<SaveSlot>>,
}

impl ArchiveRepository {
    pub fn new(store: Arc<dyn SaveSlotStore>) -> Self {
        Self {
            store,
            active: RwLock::new(None),
        }
    }

    /// Summaries of every occupied slot, in slot order.
    pub async fn list(&self) -> Result<Vec<SaveSummary>> {
        let mut summaries = Vec::new();
        for slot in SaveSlot::all() {
            if let Some(record) = self.store.query(slot).await? {
                summaries.push(SaveSummary::from(&record));
            }
        }
        Ok(summaries)
    }

    /// Start (or rename) the save in `slot`.
    pub async fn create(&self, slot: SaveSlot, player_name: impl Into<String>) -> Result<SaveSummary> {
        let record = self
            .store
            .update(slot, SaveField::PlayerName(player_name.into()))
            .await?;
        tracing::info!(%slot, "save slot created");
        Ok(SaveSummary::from(&record))
    }

    /// Make `slot` the active save. Fails on an empty slot.
    pub async fn select(&self, slot: SaveSlot) -> Result<SaveSummary> {
        let record = self
            .store
            .query(slot)
            .await?
            .ok_or(RepositoryError::EmptySlot(slot))?;
        *self
            .active
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)? = Some(slot);
        Ok(SaveSummary::from(&record))
    }

    pub fn active_slot(&self) -> Option<SaveSlot> {
        *self.active.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Delete a save; clears the selection if it was active.
    pub async fn erase(&self, slot: SaveSlot) -> Result<bool> {
        let existed = self.store.delete(slot).await?;
        let mut active = self
            .active
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if *active == Some(slot) {
            *active = None;
        }
        Ok(existed)
    }
}
