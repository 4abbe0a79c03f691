//! Async playback plumbing for story events.
//!
//! This crate wires the pure rules in `game-core` to the outside world: the
//! per-playback [`EventContext`], the request/response channel the
//! presentation layer answers, and the repositories that persist save slots
//! and settings. Consumers build a context with [`EventContext::builder`] and
//! drive the UI side through a [`PresentationPort`].
//!
//! Modules are organized by responsibility:
//! - [`context`] hosts the event context and its builder
//! - [`api`] exposes the callback contract, channel types and errors
//! - [`repository`] provides the persistence boundary and shared repositories
//! - [`config`], [`random`] and [`clock`] supply the ambient services
pub mod api;
pub mod clock;
pub mod config;
pub mod context;
pub mod random;
pub mod repository;

pub use api::{
    CancelReason, ChannelCallback, EventCallback, PresentationPort, PresentationRequest,
    RequestKind, Responder, Result, RuntimeError,
};
pub use config::RuntimeConfig;
pub use context::{EventContext, EventContextBuilder, Repositories};
pub use random::StdRandom;
pub use repository::{
    ArchiveRepository, FileSaveStore, FileSettingsStore, GameStateRepository, InMemoryResources,
    InMemorySaveStore, InMemorySettingsStore, RepositoryError, ResourceRepository, SaveField,
    SaveRecord, SaveSlot, SaveSlotStore, SaveSummary, SettingChange, SettingKey, SettingWatcher,
    Settings, SettingsStore, SkillDefinition,
};
