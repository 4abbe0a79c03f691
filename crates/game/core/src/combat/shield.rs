//! Damage-absorbing shields.
//!
//! # Lifecycle
//!
//! ```text
//! Active(value > 0, turns_left = N | permanent)
//!   ── tick ──▶ turns_left -= 1 (finite only)
//!   ── absorb ─▶ value -= min(incoming, value)
//! Expired when turns_left == 0 or value == 0, whichever comes first.
//! ```
//!
//! Expired is terminal; [`ShieldSet`] drops expired shields as soon as a
//! tick or absorption produces them.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

use super::error::CombatError;

/// A transient damage-absorption pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shield {
    pub value: u32,
    /// Remaining turns; `None` never expires from ticking.
    pub turns_left: Option<u32>,
}

/// How an absorption split incoming damage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Absorption {
    pub absorbed: u32,
    pub remaining: u32,
}

impl Shield {
    pub fn new(value: u32, turns_left: Option<u32>) -> Self {
        Self { value, turns_left }
    }

    /// A shield that only expires once its value is used up.
    pub fn permanent(value: u32) -> Self {
        Self::new(value, None)
    }

    pub fn timed(value: u32, turns: u32) -> Self {
        Self::new(value, Some(turns))
    }

    pub fn is_expired(&self) -> bool {
        self.value == 0 || self.turns_left == Some(0)
    }

    /// Advances one turn. Returns true if the shield is now expired.
    pub fn tick(&mut self) -> bool {
        if let Some(turns) = self.turns_left.as_mut() {
            *turns = turns.saturating_sub(1);
        }
        self.is_expired()
    }

    /// Absorbs `min(incoming, value)` and reports what passes through.
    pub fn absorb(&mut self, incoming: u32) -> Absorption {
        let absorbed = incoming.min(self.value);
        self.value -= absorbed;
        Absorption {
            absorbed,
            remaining: incoming - absorbed,
        }
    }
}

/// Active shields on one entity, consumed front to back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShieldSet {
    shields: ArrayVec<Shield, { GameConfig::MAX_SHIELDS }>,
}

impl ShieldSet {
    pub fn new() -> Self {
        Self {
            shields: ArrayVec::new(),
        }
    }

    /// Attaches a shield behind the existing ones.
    ///
    /// # Errors
    ///
    /// - `CombatError::ExpiredShield` if the shield has no value or no turns left
    /// - `CombatError::ShieldLimit` if the set is full
    pub fn add(&mut self, shield: Shield) -> Result<(), CombatError> {
        if shield.is_expired() {
            return Err(CombatError::ExpiredShield);
        }
        self.shields
            .try_push(shield)
            .map_err(|_| CombatError::ShieldLimit {
                capacity: GameConfig::MAX_SHIELDS,
            })
    }

    /// Runs incoming damage through every shield in order, dropping the ones it exhausts.
    pub fn absorb(&mut self, incoming: u32) -> Absorption {
        let mut remaining = incoming;
        for shield in self.shields.iter_mut() {
            if remaining == 0 {
                break;
            }
            remaining = shield.absorb(remaining).remaining;
        }
        self.shields.retain(|shield| !shield.is_expired());
        Absorption {
            absorbed: incoming - remaining,
            remaining,
        }
    }

    /// Advances every shield one turn. Returns how many expired.
    pub fn tick(&mut self) -> usize {
        let before = self.shields.len();
        for shield in self.shields.iter_mut() {
            shield.tick();
        }
        self.shields.retain(|shield| !shield.is_expired());
        before - self.shields.len()
    }

    /// Sum of all remaining shield value.
    pub fn total(&self) -> u32 {
        self.shields
            .iter()
            .fold(0u32, |sum, shield| sum.saturating_add(shield.value))
    }

    pub fn len(&self) -> usize {
        self.shields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shield> {
        self.shields.iter()
    }
}
