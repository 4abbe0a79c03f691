use game_core::SkillId;
use serde::{Deserialize, Serialize};

/// Static description of a skill, served by a resource repository.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillDefinition {
    pub id: SkillId,
    pub name: String,
    pub description: String,
    pub sp_cost: u32,
    pub power: u32,
}

impl SkillDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, sp_cost: u32, power: u32) -> Self {
        Self {
            id: SkillId::new(id),
            name: name.into(),
            description: String::new(),
            sp_cost,
            power,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
