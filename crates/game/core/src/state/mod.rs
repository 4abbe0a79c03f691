//! Entity, wallet and quest state shared by events and combat.
//!
//! This module owns the data structures that describe actors and the
//! player-facing records derived from them. Runtime layers hold these values
//! and hand the core a read-only [`GameStateView`] during resolution.
pub mod types;
mod view;

pub use types::{
    CombatStats, CurrencyMap, CurrencyType, Customization, Entity, EntityId, EntityKind,
    EntityProfile, EventLocation, Experience, ExtendedEntityProfile, InventoryMap, ItemRef, Meter,
    QuestDisplay, QuestRef, SkillId, SwitchRef, Timestamp, TitleRef, VariableRef,
    sort_for_display,
};
pub use view::{GameStateView, StaticStateView};
