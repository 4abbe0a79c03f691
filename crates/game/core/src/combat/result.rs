//! Combat result types and attack resolution.

use crate::config::GameConfig;
use crate::env::RandomSource;
use crate::event::EffectEvent;
use crate::state::{Entity, EntityId};

use super::damage::{apply_damage, calculate_damage};
use super::hit::{check_critical, check_evasion, check_hit};

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Attack failed its accuracy roll.
    Miss,
    /// Defender dodged.
    Evaded,
    /// Attack hit the target.
    Hit,
    /// Attack hit and rolled a critical.
    Critical,
}

impl AttackOutcome {
    pub fn landed(self) -> bool {
        matches!(self, Self::Hit | Self::Critical)
    }
}

/// Result of a combat resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub source: EntityId,
    pub target: EntityId,
    pub outcome: AttackOutcome,
    /// Damage rolled before shields.
    pub rolled: u32,
    /// Portion taken by shields.
    pub absorbed: u32,
    /// HP actually lost.
    pub damage: u32,
}

impl AttackResult {
    /// Presentation effect for this result.
    pub fn effect(&self) -> EffectEvent {
        if self.outcome.landed() {
            EffectEvent::Damage {
                source: self.source,
                target: self.target,
                amount: self.damage,
                absorbed: self.absorbed,
                critical: self.outcome == AttackOutcome::Critical,
            }
        } else {
            EffectEvent::Miss {
                source: self.source,
                target: self.target,
            }
        }
    }
}

/// Resolve a complete attack sequence (hit, evasion, critical, damage).
///
/// Draws happen in a fixed order (accuracy, evasion, critical) and stop at
/// the first failing roll, so a seeded source replays identical fights.
///
/// # Arguments
///
/// * `attacker` - Attacking entity (read only)
/// * `defender` - Defending entity; shields and HP are mutated in place
/// * `power` - Attack power (`GameConfig::DEFAULT_ATTACK_POWER` for basic attacks)
/// * `config` - Hit/evasion/critical rates
/// * `rng` - Random source
pub fn resolve_attack(
    attacker: &Entity,
    defender: &mut Entity,
    power: u32,
    config: &GameConfig,
    rng: &dyn RandomSource,
) -> AttackResult {
    let mut result = AttackResult {
        source: attacker.id,
        target: defender.id,
        outcome: AttackOutcome::Miss,
        rolled: 0,
        absorbed: 0,
        damage: 0,
    };

    // 1. Accuracy
    if !check_hit(rng, config.hit_rate) {
        return result;
    }

    // 2. Evasion
    if check_evasion(rng, config.evasion_rate) {
        result.outcome = AttackOutcome::Evaded;
        return result;
    }

    // 3. Critical + damage
    let critical = check_critical(rng, config.crit_rate);
    result.outcome = if critical {
        AttackOutcome::Critical
    } else {
        AttackOutcome::Hit
    };
    result.rolled = calculate_damage(power, attacker.stats.atk, defender.stats.def, critical);

    let split = apply_damage(defender, result.rolled);
    result.absorbed = split.absorbed;
    result.damage = split.remaining;
    result
}
