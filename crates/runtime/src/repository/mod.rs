//! Persistence boundary and the repositories shared by event contexts.
//!
//! Two raw stores sit at the boundary: [`SaveSlotStore`] (one row per save
//! slot) and [`SettingsStore`] (typed key-value settings with change
//! notifications). Each comes in an in-memory and a JSON-file flavour.
//! [`GameStateRepository`] and [`ArchiveRepository`] build on a save store;
//! each persists on its own, with no transaction spanning them.
pub mod archive;
pub mod error;
pub mod file;
pub mod game_state;
pub mod memory;
pub mod settings;
pub mod traits;
pub mod types;

pub use archive::{ArchiveRepository, SaveSummary};
pub use error::{RepositoryError, Result};
pub use file::{FileSaveStore, FileSettingsStore};
pub use game_state::GameStateRepository;
pub use memory::{InMemoryResources, InMemorySaveStore, InMemorySettingsStore};
pub use settings::{SettingWatcher, Settings, keys};
pub use traits::{ResourceRepository, SaveSlotStore, SettingsStore};
pub use types::{SaveField, SaveRecord, SaveSlot, SettingChange, SettingKey, SkillDefinition};
