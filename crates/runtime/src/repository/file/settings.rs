//! File-based SettingsStore implementation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::{Mutex, broadcast};

use super::{read_json, write_json_atomic};
use crate::repository::{Result, SettingChange, SettingsStore};

const CHANGE_CAPACITY: usize = 32;

/// Settings persisted as one JSON object.
///
/// The file is read once on open; afterwards the in-memory copy is
/// authoritative and every `set_raw` rewrites the whole file.
pub struct FileSettingsStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, serde_json::Value>>,
    changes: broadcast::Sender<SettingChange>,
}

impl FileSettingsStore {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let values = read_json(&path).await?.unwrap_or_default();

        Ok(Self {
            path,
            values: Mutex::new(values),
            changes: broadcast::channel(CHANGE_CAPACITY).0,
        })
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn get_raw(&self, name: &str) -> Result<Option<serde_json::Value>> {
        Ok(self.values.lock().await.get(name).cloned())
    }

    async fn set_raw(&self, name: &str, value: serde_json::Value) -> Result<()> {
        {
            let mut values = self.values.lock().await;
            let mut next = values.clone();
            next.insert(name.to_string(), value.clone());
            write_json_atomic(&self.path, &next).await?;
            *values = next;
        }
        tracing::debug!(setting = name, "setting persisted");

        let _ = self.changes.send(SettingChange {
            name: name.to_string(),
            value,
        });
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<SettingChange> {
        self.changes.subscribe()
    }
}
