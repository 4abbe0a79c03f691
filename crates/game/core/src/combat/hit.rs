//! Hit, evasion and critical rolls.

use crate::env::RandomSource;

/// Roll the attacker's accuracy check.
///
/// # Arguments
///
/// * `rng` - Random source to draw from
/// * `hit_rate` - Probability the attack lands (`GameConfig::BASE_HIT_RATE` by default)
///
/// # Returns
///
/// `true` if the attack connects.
pub fn check_hit(rng: &dyn RandomSource, hit_rate: f64) -> bool {
    rng.chance(hit_rate)
}

/// Roll the defender's evasion check against an attack that connected.
pub fn check_evasion(rng: &dyn RandomSource, evasion_rate: f64) -> bool {
    rng.chance(evasion_rate)
}

/// Roll whether a landed attack is critical.
pub fn check_critical(rng: &dyn RandomSource, crit_rate: f64) -> bool {
    rng.chance(crit_rate)
}

/// Combined probability that an attack lands and is not evaded.
pub fn calculate_hit_chance(hit_rate: f64, evasion_rate: f64) -> f64 {
    (hit_rate.clamp(0.0, 1.0) * (1.0 - evasion_rate.clamp(0.0, 1.0))).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn default_rates_combine() {
        let chance = calculate_hit_chance(GameConfig::BASE_HIT_RATE, GameConfig::BASE_EVASION_RATE);
        assert!((chance - 0.9604).abs() < 1e-9);
    }

    #[test]
    fn rates_are_clamped() {
        assert_eq!(calculate_hit_chance(2.0, -1.0), 1.0);
        assert_eq!(calculate_hit_chance(0.5, 1.5), 0.0);
    }
}
