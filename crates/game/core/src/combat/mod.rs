//! Combat resolution system.
//!
//! This module provides the rules for resolving combat interactions. Rolls
//! draw from an injected [`RandomSource`](crate::env::RandomSource); all
//! other logic is deterministic.
//!
//! # Core Functions
//!
//! - `resolve_attack`: Complete attack resolution (hit, evasion, critical, damage)
//! - `calculate_damage`: Damage from power and attack/defense
//! - `apply_damage`: Shields first, then HP (clamped to 0)
//! - [`Encounter`]: Rosters, turn order and shield ticking for one fight

pub mod damage;
pub mod encounter;
pub mod error;
pub mod hit;
pub mod result;
pub mod shield;
pub mod team;

pub use damage::{apply_damage, calculate_damage};
pub use encounter::{Encounter, EncounterOutcome};
pub use error::CombatError;
pub use hit::{calculate_hit_chance, check_critical, check_evasion, check_hit};
pub use result::{AttackOutcome, AttackResult, resolve_attack};
pub use shield::{Absorption, Shield, ShieldSet};
pub use team::{Team, TeamId};
