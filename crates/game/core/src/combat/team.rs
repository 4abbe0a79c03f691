//! Saved party formations.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::EntityId;

use super::error::CombatError;

/// Index of one of the `MAX_TEAMS` formation slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamId(u8);

impl TeamId {
    pub fn new(index: u8) -> Result<Self, CombatError> {
        if (index as usize) < GameConfig::MAX_TEAMS {
            Ok(Self(index))
        } else {
            Err(CombatError::InvalidTeam(index))
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }
}

/// A named formation of up to `MAX_PARTY_SIZE` members.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    members: ArrayVec<EntityId, { GameConfig::MAX_PARTY_SIZE }>,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            members: ArrayVec::new(),
        }
    }

    /// Adds a member; a member already in the team is left in place.
    pub fn add_member(&mut self, member: EntityId) -> Result<(), CombatError> {
        if self.members.contains(&member) {
            return Ok(());
        }
        self.members
            .try_push(member)
            .map_err(|_| CombatError::PartyTooLarge {
                size: GameConfig::MAX_PARTY_SIZE + 1,
                limit: GameConfig::MAX_PARTY_SIZE,
            })
    }

    pub fn remove_member(&mut self, member: EntityId) {
        self.members.retain(|id| *id != member);
    }

    pub fn members(&self) -> &[EntityId] {
        &self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_ids_are_bounded() {
        assert!(TeamId::new(0).is_ok());
        assert!(TeamId::new(4).is_ok());
        assert_eq!(TeamId::new(5), Err(CombatError::InvalidTeam(5)));
    }

    #[test]
    fn members_are_unique_and_capped() {
        let mut team = Team::new(TeamId::new(0).unwrap(), "Vanguard");
        for id in 0..4 {
            team.add_member(EntityId(id)).unwrap();
        }
        team.add_member(EntityId(0)).unwrap();
        assert_eq!(team.members().len(), 4);
        assert!(team.add_member(EntityId(9)).is_err());

        team.remove_member(EntityId(2));
        assert_eq!(team.members(), &[EntityId(0), EntityId(1), EntityId(3)]);
    }
}
