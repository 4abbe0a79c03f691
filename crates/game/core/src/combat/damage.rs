//! Damage calculation and application.

use crate::config::GameConfig;
use crate::state::Entity;

use super::shield::Absorption;

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// base_damage = max(1, power × atk / max(def, 1))
///
/// if critical:
///     final_damage = base_damage + floor(base_damage × CRIT_DAMAGE_MULTIPLIER)
/// ```
///
/// With equal attack and defense the base damage equals `power`.
pub fn calculate_damage(power: u32, atk: u32, def: u32, critical: bool) -> u32 {
    let scaled = power as u64 * atk as u64 / def.max(1) as u64;
    let base = scaled.clamp(1, u32::MAX as u64) as u32;

    if critical {
        let bonus = (base as f64 * GameConfig::CRIT_DAMAGE_MULTIPLIER).floor() as u32;
        base.saturating_add(bonus)
    } else {
        base
    }
}

/// Apply damage to an entity: shields first, then HP (clamped to 0).
///
/// Returns the absorption split; `remaining` is the HP actually lost.
pub fn apply_damage(entity: &mut Entity, amount: u32) -> Absorption {
    let absorption = entity.shields.absorb(amount);
    let lost = entity.hp.drain(absorption.remaining);
    Absorption {
        absorbed: absorption.absorbed,
        remaining: lost,
    }
}
