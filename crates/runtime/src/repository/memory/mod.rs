//! In-memory repository implementations for tests and local runs.

mod resources;
mod save;
mod settings;

pub use resources::InMemoryResources;
pub use save::InMemorySaveStore;
pub use settings::InMemorySettingsStore;
