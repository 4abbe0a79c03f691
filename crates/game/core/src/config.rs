/// Game configuration constants and tunable parameters.
///
/// The combat and persistence constants are fixed balance values; the
/// engine reads them directly instead of threading a tables oracle around.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Base chance for an attack to land before evasion is applied.
    pub hit_rate: f64,
    /// Base chance for a defender to dodge an attack that would land.
    pub evasion_rate: f64,
    /// Base chance for a landed attack to be critical.
    pub crit_rate: f64,
}

impl GameConfig {
    // ===== persistence limits =====
    pub const MAX_SAVE_SLOTS: usize = 5;
    pub const MAX_TEAMS: usize = 5;

    // ===== roster limits =====
    pub const MAX_PARTY_SIZE: usize = 4;
    pub const MAX_ENEMY_SIZE: usize = 5;
    pub const MAX_SHIELDS: usize = 8;

    // ===== combat tuning =====
    pub const BASE_CRIT_RATE: f64 = 0.05;
    /// Extra damage a critical hit adds, as a fraction of the base damage.
    pub const CRIT_DAMAGE_MULTIPLIER: f64 = 0.5;
    pub const BASE_HIT_RATE: f64 = 0.98;
    pub const BASE_EVASION_RATE: f64 = 0.02;
    pub const DEFAULT_ATTACK_POWER: u32 = 25;
    /// Interval between combat animation ticks, in milliseconds.
    pub const COMBAT_TICK_INTERVAL_MS: u64 = 16;

    pub fn new() -> Self {
        Self {
            hit_rate: Self::BASE_HIT_RATE,
            evasion_rate: Self::BASE_EVASION_RATE,
            crit_rate: Self::BASE_CRIT_RATE,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
