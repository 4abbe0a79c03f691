//! Typed access to a [`SettingsStore`].

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::broadcast;

use super::error::{RepositoryError, Result};
use super::traits::SettingsStore;
use super::types::{SettingChange, SettingKey};

/// Settings known to the client.
pub mod keys {
    use super::SettingKey;

    /// Characters revealed per tick in dialogue boxes; 0 shows lines at once.
    pub const TEXT_SPEED: SettingKey<u8> = SettingKey::new("text_speed", 2);
    pub const AUTO_ADVANCE: SettingKey<bool> = SettingKey::new("auto_advance", false);
    /// Save slot resumed on launch.
    pub const LAST_SLOT: SettingKey<Option<u8>> = SettingKey::new("last_slot", None);
}

/// Typed facade that decodes values and falls back to key defaults.
#[derive(Clone)]
pub struct Settings {
    store: Arc<dyn SettingsStore>,
}

impl Settings {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Stored value, or the key's default when nothing was stored yet.
    pub async fn get<T>(&self, key: &SettingKey<T>) -> Result<T>
    where
        T: DeserializeOwned + Clone,
    {
        match self.store.get_raw(key.name()).await? {
            Some(value) => decode(key, value),
            None => Ok(key.default_value().clone()),
        }
    }

    pub async fn set<T>(&self, key: &SettingKey<T>, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        let value = serde_json::to_value(value).map_err(|e| RepositoryError::Json(e.to_string()))?;
        self.store.set_raw(key.name(), value).await
    }

    /// Stream of future values for `key`.
    pub fn watch<T>(&self, key: SettingKey<T>) -> SettingWatcher<T>
    where
        T: DeserializeOwned + Clone,
    {
        SettingWatcher {
            key,
            changes: self.store.subscribe(),
            store: Arc::clone(&self.store),
        }
    }
}

/// Change stream for one setting.
pub struct SettingWatcher<T> {
    key: SettingKey<T>,
    changes: broadcast::Receiver<SettingChange>,
    store: Arc<dyn SettingsStore>,
}

impl<T> SettingWatcher<T>
where
    T: DeserializeOwned + Clone,
{
    /// Waits for the next write to this key and returns the new value.
    ///
    /// If the watcher fell behind and missed notifications, the current
    /// stored value is returned instead.
    pub async fn changed(&mut self) -> Result<T> {
        loop {
            match self.changes.recv().await {
                Ok(change) if change.name == self.key.name() => {
                    return decode(&self.key, change.value);
                }
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    tracing::warn!(setting = self.key.name(), missed, "settings watcher lagged");
                    return match self.store.get_raw(self.key.name()).await? {
                        Some(value) => decode(&self.key, value),
                        None => Ok(self.key.default_value().clone()),
                    };
                }
                Err(broadcast::error::RecvError::Closed) => {
                    return Err(RepositoryError::WatchClosed);
                }
            }
        }
    }
}

fn decode<T: DeserializeOwned>(key: &SettingKey<T>, value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| RepositoryError::Json(format!("{}: {}", key.name(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemorySettingsStore;

    fn settings() -> Settings {
        Settings::new(Arc::new(InMemorySettingsStore::new()))
    }

    #[tokio::test]
    async fn unset_keys_return_their_default() {
        let settings = settings();
        assert_eq!(settings.get(&keys::TEXT_SPEED).await.unwrap(), 2);
        assert_eq!(settings.get(&keys::LAST_SLOT).await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let settings = settings();
        settings.set(&keys::AUTO_ADVANCE, &true).await.unwrap();
        settings.set(&keys::LAST_SLOT, &Some(3)).await.unwrap();

        assert!(settings.get(&keys::AUTO_ADVANCE).await.unwrap());
        assert_eq!(settings.get(&keys::LAST_SLOT).await.unwrap(), Some(3));
    }

    #[tokio::test]
    async fn watcher_skips_other_keys() {
        let settings = settings();
        let mut speed = settings.watch(keys::TEXT_SPEED);

        settings.set(&keys::AUTO_ADVANCE, &true).await.unwrap();
        settings.set(&keys::TEXT_SPEED, &5).await.unwrap();

        assert_eq!(speed.changed().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn mistyped_value_is_a_json_error() {
        let store = Arc::new(InMemorySettingsStore::new());
        store
            .set_raw("text_speed", serde_json::json!("fast"))
            .await
            .unwrap();

        let err = Settings::new(store).get(&keys::TEXT_SPEED).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Json(_)));
    }
}
