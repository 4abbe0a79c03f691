//! Combat validation errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

/// Errors raised while assembling or resolving an encounter.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    #[error("party of {size} exceeds the limit of {limit}")]
    PartyTooLarge { size: usize, limit: usize },

    #[error("enemy group of {size} exceeds the limit of {limit}")]
    EnemyGroupTooLarge { size: usize, limit: usize },

    #[error("an encounter needs at least one combatant on each side")]
    EmptySide,

    #[error("entity {0} is not part of this encounter")]
    UnknownEntity(EntityId),

    #[error("entity {0} appears more than once in the encounter")]
    DuplicateEntity(EntityId),

    #[error("entity {0} is already defeated")]
    Defeated(EntityId),

    #[error("shield has no value or no turns left")]
    ExpiredShield,

    #[error("shield limit of {capacity} reached")]
    ShieldLimit { capacity: usize },

    #[error("team {0} is outside the available team slots")]
    InvalidTeam(u8),
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        use CombatError::*;
        match self {
            PartyTooLarge { .. } | EnemyGroupTooLarge { .. } | EmptySide => {
                ErrorSeverity::Validation
            }
            UnknownEntity(_) | DuplicateEntity(_) => ErrorSeverity::Validation,
            Defeated(_) => ErrorSeverity::Recoverable,
            ExpiredShield | ShieldLimit { .. } => ErrorSeverity::Recoverable,
            InvalidTeam(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use CombatError::*;
        match self {
            PartyTooLarge { .. } => "COMBAT_PARTY_TOO_LARGE",
            EnemyGroupTooLarge { .. } => "COMBAT_ENEMY_GROUP_TOO_LARGE",
            EmptySide => "COMBAT_EMPTY_SIDE",
            UnknownEntity(_) => "COMBAT_UNKNOWN_ENTITY",
            DuplicateEntity(_) => "COMBAT_DUPLICATE_ENTITY",
            Defeated(_) => "COMBAT_DEFEATED",
            ExpiredShield => "COMBAT_EXPIRED_SHIELD",
            ShieldLimit { .. } => "COMBAT_SHIELD_LIMIT",
            InvalidTeam(_) => "COMBAT_INVALID_TEAM",
        }
    }
}
