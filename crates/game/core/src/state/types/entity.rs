//! Live entity state mutated by the combat engine.

use std::collections::BTreeMap;

use crate::combat::ShieldSet;

use super::common::{EntityId, Meter};
use super::refs::SkillId;

/// Which side an entity fights on.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EntityKind {
    #[default]
    Player,
    Enemy,
}

/// Experience progress toward the next level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Experience {
    /// Experience earned within the current level.
    pub current: u64,
    /// Experience required to complete the current level.
    pub next: u64,
    /// Lifetime experience.
    pub total: u64,
}

impl Experience {
    pub fn new(current: u64, next: u64, total: u64) -> Self {
        Self {
            current,
            next,
            total,
        }
    }

    /// Fraction of the current level completed, clamped to `0.0..=1.0`.
    ///
    /// A level with no requirement (`next == 0`) reads as complete.
    pub fn progress(&self) -> f32 {
        if self.next == 0 {
            return 1.0;
        }
        (self.current as f64 / self.next as f64).clamp(0.0, 1.0) as f32
    }
}

/// Combat stats read by hit and damage calculations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub atk: u32,
    pub def: u32,
    pub spd: u32,
}

impl CombatStats {
    pub fn new(atk: u32, def: u32, spd: u32) -> Self {
        Self { atk, def, spd }
    }
}

impl Default for CombatStats {
    fn default() -> Self {
        Self::new(10, 10, 10)
    }
}

/// Plugin-supplied presentation record (portrait, palette, title overrides).
///
/// The core carries it untouched; only the owning plugin interprets fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customization {
    pub plugin: String,
    pub fields: BTreeMap<String, String>,
}

/// An actor in an event or combat: the player, a party member or an enemy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub name: String,
    pub level: u32,
    pub experience: Experience,
    pub hp: Meter,
    pub sp: Meter,
    pub ap: Meter,
    pub stats: CombatStats,
    /// Broad classification (e.g. "beast", "knight").
    pub category: String,
    /// Progression path within the category.
    pub path: String,
    /// Equipped skills in slot order.
    pub skills: Vec<SkillId>,
    pub shields: ShieldSet,
    pub customization: Option<Customization>,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            level: 1,
            experience: Experience::default(),
            hp: Meter::full(100),
            sp: Meter::full(20),
            ap: Meter::full(3),
            stats: CombatStats::default(),
            category: String::new(),
            path: String::new(),
            skills: Vec::new(),
            shields: ShieldSet::new(),
            customization: None,
        }
    }

    pub fn with_level(mut self, level: u32, experience: Experience) -> Self {
        self.level = level;
        self.experience = experience;
        self
    }

    pub fn with_hp(mut self, maximum: u32) -> Self {
        self.hp = Meter::full(maximum);
        self
    }

    pub fn with_sp(mut self, maximum: u32) -> Self {
        self.sp = Meter::full(maximum);
        self
    }

    pub fn with_ap(mut self, maximum: u32) -> Self {
        self.ap = Meter::full(maximum);
        self
    }

    pub fn with_stats(mut self, stats: CombatStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_class(mut self, category: impl Into<String>, path: impl Into<String>) -> Self {
        self.category = category.into();
        self.path = path.into();
        self
    }

    pub fn with_skills(mut self, skills: impl IntoIterator<Item = SkillId>) -> Self {
        self.skills = skills.into_iter().collect();
        self
    }

    pub fn with_customization(mut self, customization: Customization) -> Self {
        self.customization = Some(customization);
        self
    }

    pub fn is_alive(&self) -> bool {
        !self.hp.is_empty()
    }
}
