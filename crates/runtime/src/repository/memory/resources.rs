//! In-memory ResourceRepository implementation.

use std::collections::BTreeMap;

use game_core::SkillId;

use crate::repository::{ResourceRepository, SkillDefinition};

/// Static data held in memory, assembled with builder calls.
#[derive(Clone, Debug, Default)]
pub struct InMemoryResources {
    skills: BTreeMap<SkillId, SkillDefinition>,
}

impl InMemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a skill definition.
    pub fn with_skill(mut self, skill: SkillDefinition) -> Self {
        self.skills.insert(skill.id.clone(), skill);
        self
    }
}

impl ResourceRepository for InMemoryResources {
    fn skill(&self, id: &SkillId) -> Option<SkillDefinition> {
        self.skills.get(id).cloned()
    }

    fn skills(&self) -> Vec<SkillDefinition> {
        self.skills.values().cloned().collect()
    }
}
