//! File-based SaveSlotStore implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{read_json, write_json_atomic};
use crate::repository::{Result, SaveField, SaveRecord, SaveSlot, SaveSlotStore};

/// File-based implementation of SaveSlotStore.
///
/// Each slot is stored as `slot_{index}.json` under the base directory.
pub struct FileSaveStore {
    base_dir: PathBuf,
    // Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl FileSaveStore {
    /// Create the store, creating `base_dir` if needed.
    pub async fn open(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&base_dir).await?;
        Ok(Self {
            base_dir,
            write_lock: Mutex::new(()),
        })
    }

    fn slot_path(&self, slot: SaveSlot) -> PathBuf {
        self.base_dir.join(format!("slot_{}.json", slot.index()))
    }
}

#[async_trait]
impl SaveSlotStore for FileSaveStore {
    async fn query(&self, slot: SaveSlot) -> Result<Option<SaveRecord>> {
        read_json(&self.slot_path(slot)).await
    }

    async fn update(&self, slot: SaveSlot, field: SaveField) -> Result<SaveRecord> {
        let _guard = self.write_lock.lock().await;
        let path = self.slot_path(slot);

        let mut record = read_json(&path)
            .await?
            .unwrap_or_else(|| SaveRecord::new(slot));
        record.apply(field);
        write_json_atomic(&path, &record).await?;

        tracing::debug!("Saved slot {} to {}", slot, path.display());
        Ok(record)
    }

    async fn delete(&self, slot: SaveSlot) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        match tokio::fs::remove_file(self.slot_path(slot)).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
