//! Event and combat rules shared by every client.
//!
//! `game-core` defines the canonical rules (value and condition resolution,
//! action invocations, shields and combat math) and exposes pure APIs that
//! the runtime drives during story playback. Nothing here performs I/O;
//! randomness and persisted state arrive through the [`env`] and [`state`]
//! seams.
pub mod action;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod event;
pub mod state;

pub use action::{Action, ActionExtra, ActionSlot};
pub use combat::{
    AttackOutcome, AttackResult, CombatError, Encounter, EncounterOutcome, Shield, ShieldSet,
    Team, TeamId,
};
pub use config::GameConfig;
pub use env::{EvalEnv, PcgRng, RandomSource, SequenceRng};
pub use error::{ErrorSeverity, GameError};
pub use event::{
    Comparator, EffectEvent, EventCondition, EventValue, ResolveError, resolve_condition,
    resolve_value,
};
pub use state::{
    CombatStats, CurrencyMap, CurrencyType, Customization, Entity, EntityId, EntityKind,
    EntityProfile, EventLocation, Experience, ExtendedEntityProfile, GameStateView, InventoryMap,
    ItemRef, Meter, QuestDisplay, QuestRef, SkillId, StaticStateView, SwitchRef, Timestamp,
    TitleRef, VariableRef,
};
