//! In-memory SettingsStore implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::repository::{RepositoryError, Result, SettingChange, SettingsStore};

const CHANGE_CAPACITY: usize = 32;

pub struct InMemorySettingsStore {
    values: RwLock<HashMap<String, serde_json::Value>>,
    changes: broadcast::Sender<SettingChange>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            changes: broadcast::channel(CHANGE_CAPACITY).0,
        }
    }
}

impl Default for InMemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get_raw(&self, name: &str) -> Result<Option<serde_json::Value>> {
        let values = self
            .values
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(values.get(name).cloned())
    }

    async fn set_raw(&self, name: &str, value: serde_json::Value) -> Result<()> {
        self.values
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?
            .insert(name.to_string(), value.clone());
        // No subscribers is fine.
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
