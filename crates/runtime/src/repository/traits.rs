//! Repository contracts for the persistence boundary.

use async_trait::async_trait;
use game_core::SkillId;
use tokio::sync::broadcast;

use super::error::Result;
use super::types::{SaveField, SaveRecord, SaveSlot, SettingChange, SkillDefinition};

/// Keyed row store with one record per save slot.
///
/// This is DYNAMIC data that changes during play. Calls suspend until the
/// underlying storage confirms.
#[async_trait]
pub trait SaveSlotStore: Send + Sync {
    /// Load the record for `slot`, if one was ever written.
    async fn query(&self, slot: SaveSlot) -> Result<Option<SaveRecord>>;

    /// Write a single field, creating the record if needed.
    ///
    /// Returns the record as stored after the update.
    async fn update(&self, slot: SaveSlot, field: SaveField) -> Result<SaveRecord>;

    /// Remove the record. Returns whether one existed.
    async fn delete(&self, slot: SaveSlot) -> Result<bool>;
}

/// Untyped key-value settings store with a change stream.
///
/// Most callers go through the typed [`Settings`](super::Settings) facade.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get_raw(&self, name: &str) -> Result<Option<serde_json::Value>>;

    /// Store `value` and publish a [`SettingChange`] to subscribers.
    async fn set_raw(&self, name: &str, value: serde_json::Value) -> Result<()>;

    fn subscribe(&self) -> broadcast::Receiver<SettingChange>;
}

/// Read-only static game data.
///
/// This is STATIC content loaded once per session, unlike the save stores.
pub trait ResourceRepository: Send + Sync {
    fn skill(&self, id: &SkillId) -> Option<SkillDefinition>;

    /// All known skills, ordered by id.
    fn skills(&self) -> Vec<SkillDefinition>;
}
