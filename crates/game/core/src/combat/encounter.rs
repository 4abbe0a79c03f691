//! Turn-based encounter between the party and an enemy group.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::RandomSource;
use crate::event::EffectEvent;
use crate::state::{Entity, EntityId};

use super::error::CombatError;
use super::result::{AttackResult, resolve_attack};
use super::shield::Shield;

/// Result of an encounter from the party's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterOutcome {
    Ongoing,
    Victory,
    Defeat,
}

/// Combatants and turn counter for one fight.
///
/// The encounter owns its entities for the duration of the fight; callers
/// copy results back into persistent state once it ends.
#[derive(Clone, Debug)]
pub struct Encounter {
    party: ArrayVec<Entity, { GameConfig::MAX_PARTY_SIZE }>,
    enemies: ArrayVec<Entity, { GameConfig::MAX_ENEMY_SIZE }>,
    config: GameConfig,
    turn: u32,
}

impl Encounter {
    /// Assembles an encounter.
    ///
    /// # Errors
    ///
    /// - `PartyTooLarge` / `EnemyGroupTooLarge` when a side exceeds its cap
    /// - `EmptySide` when either side has no combatants
    /// - `DuplicateEntity` when an id is shared, within a side or across both
    pub fn new(
        party: Vec<Entity>,
        enemies: Vec<Entity>,
        config: GameConfig,
    ) -> Result<Self, CombatError> {
        if party.is_empty() || enemies.is_empty() {
            return Err(CombatError::EmptySide);
        }
        if party.len() > GameConfig::MAX_PARTY_SIZE {
            return Err(CombatError::PartyTooLarge {
                size: party.len(),
                limit: GameConfig::MAX_PARTY_SIZE,
            });
        }
        if enemies.len() > GameConfig::MAX_ENEMY_SIZE {
            return Err(CombatError::EnemyGroupTooLarge {
                size: enemies.len(),
                limit: GameConfig::MAX_ENEMY_SIZE,
            });
        }
        let mut seen = Vec::with_capacity(party.len() + enemies.len());
        for entity in party.iter().chain(enemies.iter()) {
            if seen.contains(&entity.id) {
                return Err(CombatError::DuplicateEntity(entity.id));
            }
            seen.push(entity.id);
        }

        Ok(Self {
            party: party.into_iter().collect(),
            enemies: enemies.into_iter().collect(),
            config,
            turn: 0,
        })
    }

    /// Completed turns so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn party(&self) -> &[Entity] {
        &self.party
    }

    pub fn enemies(&self) -> &[Entity] {
        &self.enemies
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.party
            .iter()
            .chain(self.enemies.iter())
            .find(|entity| entity.id == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.party
            .iter_mut()
            .chain(self.enemies.iter_mut())
            .find(|entity| entity.id == id)
    }

    fn is_party_member(&self, id: EntityId) -> bool {
        self.party.iter().any(|entity| entity.id == id)
    }

    /// Living combatants by speed, fastest first.
    ///
    /// Ties keep roster order with the party ahead of the enemies.
    pub fn turn_order(&self) -> Vec<EntityId> {
        let mut order: Vec<&Entity> = self
            .party
            .iter()
            .chain(self.enemies.iter())
            .filter(|entity| entity.is_alive())
            .collect();
        order.sort_by(|a, b| b.stats.spd.cmp(&a.stats.spd));
        order.into_iter().map(|entity| entity.id).collect()
    }

    pub fn outcome(&self) -> EncounterOutcome {
        if !self.enemies.iter().any(Entity::is_alive) {
            EncounterOutcome::Victory
        } else if !self.party.iter().any(Entity::is_alive) {
            EncounterOutcome::Defeat
        } else {
            EncounterOutcome::Ongoing
        }
    }

    /// One entity attacks another.
    ///
    /// # Errors
    ///
    /// - `UnknownEntity` if either id is not in the encounter
    /// - `Defeated` if either side of the exchange is already down
    pub fn attack(
        &mut self,
        source: EntityId,
        target: EntityId,
        power: u32,
        rng: &dyn RandomSource,
    ) -> Result<AttackResult, CombatError> {
        let attacker = self
            .entity(source)
            .ok_or(CombatError::UnknownEntity(source))?
            .clone();
        if !attacker.is_alive() {
            return Err(CombatError::Defeated(source));
        }
        let config = self.config.clone();
        let defender = self
            .entity_mut(target)
            .ok_or(CombatError::UnknownEntity(target))?;
        if !defender.is_alive() {
            return Err(CombatError::Defeated(target));
        }
        Ok(resolve_attack(&attacker, defender, power, &config, rng))
    }

    pub fn grant_shield(
        &mut self,
        target: EntityId,
        shield: Shield,
    ) -> Result<EffectEvent, CombatError> {
        let entity = self
            .entity_mut(target)
            .ok_or(CombatError::UnknownEntity(target))?;
        entity.shields.add(shield)?;
        Ok(EffectEvent::ShieldGranted {
            target,
            value: shield.value,
            turns: shield.turns_left,
        })
    }

    pub fn heal(&mut self, target: EntityId, amount: u32) -> Result<EffectEvent, CombatError> {
        let entity = self
            .entity_mut(target)
            .ok_or(CombatError::UnknownEntity(target))?;
        if !entity.is_alive() {
            return Err(CombatError::Defeated(target));
        }
        let restored = entity.hp.restore(amount);
        Ok(EffectEvent::Heal {
            target,
            amount: restored,
        })
    }

    /// Closes the current turn: every combatant's shields tick once.
    pub fn end_turn(&mut self) -> Vec<EffectEvent> {
        self.turn += 1;
        self.party
            .iter_mut()
            .chain(self.enemies.iter_mut())
            .filter_map(|entity| {
                let count = entity.shields.tick();
                (count > 0).then_some(EffectEvent::ShieldExpired {
                    target: entity.id,
                    count,
                })
            })
            .collect()
    }

    /// Plays one automatic round: each living combatant, in turn order,
    /// attacks the first living opponent with the default attack power.
    pub fn play_round(&mut self, rng: &dyn RandomSource) -> Vec<EffectEvent> {
        let mut effects = Vec::new();
        for source in self.turn_order() {
            if self.outcome() != EncounterOutcome::Ongoing {
                break;
            }
            let Some(target) = self.first_opponent(source) else {
                continue;
            };
            // Combatants felled earlier in this round lose their action.
            if let Ok(result) = self.attack(source, target, GameConfig::DEFAULT_ATTACK_POWER, rng)
            {
                effects.push(result.effect());
            }
        }
        effects.extend(self.end_turn());
        effects
    }

    fn first_opponent(&self, source: EntityId) -> Option<EntityId> {
        let opponents = if self.is_party_member(source) {
            &self.enemies[..]
        } else {
            &self.party[..]
        };
        opponents
            .iter()
            .find(|entity| entity.is_alive())
            .map(|entity| entity.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, SequenceRng};
    use crate::state::{CombatStats, EntityKind};

    fn member(id: u32, spd: u32) -> Entity {
        Entity::new(EntityId(id), EntityKind::Player, format!("ally-{id}"))
            .with_stats(CombatStats::new(10, 10, spd))
    }

    fn enemy(id: u32, spd: u32) -> Entity {
        Entity::new(EntityId(id), EntityKind::Enemy, format!("foe-{id}"))
            .with_hp(30)
            .with_stats(CombatStats::new(10, 10, spd))
    }

    #[test]
    fn roster_caps_are_enforced() {
        let party: Vec<_> = (0..5).map(|id| member(id, 10)).collect();
        assert_eq!(
            Encounter::new(party, vec![enemy(10, 1)], GameConfig::default()).unwrap_err(),
            CombatError::PartyTooLarge { size: 5, limit: 4 }
        );

        let enemies: Vec<_> = (10..16).map(|id| enemy(id, 10)).collect();
        assert_eq!(
            Encounter::new(vec![member(0, 1)], enemies, GameConfig::default()).unwrap_err(),
            CombatError::EnemyGroupTooLarge { size: 6, limit: 5 }
        );

        assert_eq!(
            Encounter::new(vec![], vec![enemy(10, 1)], GameConfig::default()).unwrap_err(),
            CombatError::EmptySide
        );
    }

    #[test]
    fn shared_ids_are_rejected() {
        let hero = Entity::new(EntityId(0), EntityKind::Player, "hero");
        let foe = Entity::new(EntityId(0), EntityKind::Enemy, "foe");
        assert_eq!(
            Encounter::new(vec![hero], vec![foe], GameConfig::default()).unwrap_err(),
            CombatError::DuplicateEntity(EntityId(0))
        );

        assert_eq!(
            Encounter::new(
                vec![member(0, 1)],
                vec![enemy(10, 1), enemy(10, 2)],
                GameConfig::default()
            )
            .unwrap_err(),
            CombatError::DuplicateEntity(EntityId(10))
        );
    }

    #[test]
    fn turn_order_sorts_by_speed_with_party_first_on_ties() {
        let encounter = Encounter::new(
            vec![member(0, 10), member(1, 20)],
            vec![enemy(10, 20), enemy(11, 5)],
            GameConfig::default(),
        )
        .unwrap();

        assert_eq!(
            encounter.turn_order(),
            vec![EntityId(1), EntityId(10), EntityId(0), EntityId(11)]
        );
    }

    #[test]
    fn end_turn_ticks_and_reports_expired_shields() {
        let mut encounter =
            Encounter::new(vec![member(0, 10)], vec![enemy(10, 5)], GameConfig::default())
                .unwrap();
        encounter.grant_shield(EntityId(0), Shield::timed(10, 2)).unwrap();
        encounter.grant_shield(EntityId(10), Shield::permanent(10)).unwrap();

        assert!(encounter.end_turn().is_empty());
        assert_eq!(
            encounter.end_turn(),
            vec![EffectEvent::ShieldExpired {
                target: EntityId(0),
                count: 1
            }]
        );
        assert_eq!(encounter.turn(), 2);
        assert_eq!(encounter.entity(EntityId(10)).unwrap().shields.total(), 10);
    }

    #[test]
    fn attacking_unknown_or_defeated_entities_fails() {
        let mut encounter =
            Encounter::new(vec![member(0, 10)], vec![enemy(10, 5)], GameConfig::default())
                .unwrap();
        let rng = SequenceRng::new([0]);
        assert_eq!(
            encounter.attack(EntityId(0), EntityId(99), 25, &rng).unwrap_err(),
            CombatError::UnknownEntity(EntityId(99))
        );

        encounter.entity_mut(EntityId(10)).unwrap().hp.drain(u32::MAX);
        assert_eq!(
            encounter.attack(EntityId(0), EntityId(10), 25, &rng).unwrap_err(),
            CombatError::Defeated(EntityId(10))
        );
        assert_eq!(encounter.outcome(), EncounterOutcome::Victory);
    }

    #[test]
    fn automatic_rounds_reach_a_result() {
        let mut encounter = Encounter::new(
            vec![member(0, 12).with_stats(CombatStats::new(20, 10, 12))],
            vec![enemy(10, 8), enemy(11, 6)],
            GameConfig::default(),
        )
        .unwrap();
        let rng = PcgRng::seeded(3);

        let mut rounds = 0;
        while encounter.outcome() == EncounterOutcome::Ongoing && rounds < 100 {
            encounter.play_round(&rng);
            rounds += 1;
        }
        assert_ne!(encounter.outcome(), EncounterOutcome::Ongoing);
    }
}
