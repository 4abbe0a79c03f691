//! Display snapshots of entities.
//!
//! Profiles are rebuilt from live [`Entity`] state on every render and never
//! mutated in place; a new snapshot replaces the old one when the entity
//! changes.

use super::entity::{Customization, Entity};
use super::refs::SkillId;

/// Basic entity card: name, level, experience and HP/SP.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityProfile {
    pub name: String,
    pub level: u32,
    /// Level progress in `0.0..=1.0`.
    pub exp_progress: f32,
    pub exp_current: u64,
    pub exp_next: u64,
    pub exp_total: u64,
    pub hp: u32,
    pub max_hp: u32,
    pub sp: u32,
    pub max_sp: u32,
}

impl From<&Entity> for EntityProfile {
    fn from(entity: &Entity) -> Self {
        Self {
            name: entity.name.clone(),
            level: entity.level,
            exp_progress: entity.experience.progress(),
            exp_current: entity.experience.current,
            exp_next: entity.experience.next,
            exp_total: entity.experience.total,
            hp: entity.hp.current,
            max_hp: entity.hp.maximum,
            sp: entity.sp.current,
            max_sp: entity.sp.maximum,
        }
    }
}

/// Full status screen snapshot including combat stats and loadout.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtendedEntityProfile {
    pub base: EntityProfile,
    pub atk: u32,
    pub def: u32,
    pub spd: u32,
    pub max_ap: u32,
    pub category: String,
    pub path: String,
    pub skills: Vec<SkillId>,
    pub customization: Option<Customization>,
}

impl From<&Entity> for ExtendedEntityProfile {
    fn from(entity: &Entity) -> Self {
        Self {
            base: EntityProfile::from(entity),
            atk: entity.stats.atk,
            def: entity.stats.def,
            spd: entity.stats.spd,
            max_ap: entity.ap.maximum,
            category: entity.category.clone(),
            path: entity.path.clone(),
            skills: entity.skills.clone(),
            customization: entity.customization.clone(),
        }
    }
}
