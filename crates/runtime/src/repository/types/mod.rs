//! Records exchanged across the persistence boundary.

mod save;
mod setting;
mod skill;

pub use save::{SaveField, SaveRecord, SaveSlot};
pub use setting::{SettingChange, SettingKey};
pub use skill::SkillDefinition;
