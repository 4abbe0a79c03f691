pub mod common;
pub mod currency;
pub mod entity;
pub mod profile;
pub mod quest;
pub mod refs;

// Re-export common types
pub use common::{EntityId, EventLocation, Meter, Timestamp};

// Re-export currency and reward types
pub use currency::{CurrencyMap, CurrencyType, InventoryMap};

// Re-export entity state and display snapshots
pub use entity::{CombatStats, Customization, Entity, EntityKind, Experience};
pub use profile::{EntityProfile, ExtendedEntityProfile};

// Re-export quest records
pub use quest::{QuestDisplay, sort_for_display};

// Re-export typed references
pub use refs::{ItemRef, QuestRef, SkillId, SwitchRef, TitleRef, VariableRef};
