//! Quest display records.

use super::common::{EventLocation, Timestamp};
use super::currency::{CurrencyMap, InventoryMap};

/// Immutable quest record shown in the quest log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestDisplay {
    pub name: String,
    pub description: String,
    /// Higher priorities sort first.
    pub priority: i32,
    /// Where the quest leads the player, if it has a navigation target.
    pub target: Option<EventLocation>,
    pub currency_rewards: Option<CurrencyMap>,
    pub item_rewards: Option<InventoryMap>,
    pub expires_at: Option<Timestamp>,
}

impl QuestDisplay {
    pub fn new(name: impl Into<String>, description: impl Into<String>, priority: i32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            priority,
            target: None,
            currency_rewards: None,
            item_rewards: None,
            expires_at: None,
        }
    }

    pub fn with_target(mut self, target: EventLocation) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_currency_rewards(mut self, rewards: CurrencyMap) -> Self {
        self.currency_rewards = Some(rewards);
        self
    }

    pub fn with_item_rewards(mut self, rewards: InventoryMap) -> Self {
        self.item_rewards = Some(rewards);
        self
    }

    pub fn with_expiry(mut self, expires_at: Timestamp) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// A quest without an expiry never expires.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Sorts quests for display: priority descending, then name.
pub fn sort_for_display(quests: &mut [QuestDisplay]) {
    quests.sort_by(|a, b| b.priority.cmp(&a.priority).then_with(|| a.name.cmp(&b.name)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_inclusive_and_optional() {
        let quest = QuestDisplay::new("Rats", "Clear the cellar", 1);
        assert!(!quest.is_expired(Timestamp(i64::MAX)));

        let quest = quest.with_expiry(Timestamp(1_000));
        assert!(!quest.is_expired(Timestamp(999)));
        assert!(quest.is_expired(Timestamp(1_000)));
    }

    #[test]
    fn display_order_prefers_priority_then_name() {
        let mut quests = vec![
            QuestDisplay::new("b", "", 1),
            QuestDisplay::new("a", "", 1),
            QuestDisplay::new("z", "", 5),
        ];
        sort_for_display(&mut quests);
        let names: Vec<_> = quests.iter().map(|q| q.name.as_str()).collect();
        assert_eq!(names, ["z", "a", "b"]);
    }
}
