//! Non-null action reference with a placeholder marker.

use std::collections::BTreeMap;

use crate::state::EntityId;

use super::types::{Action, ActionExtra};

const PLACEHOLDER_MESSAGE: &str = "placeholder action accessed: no action is in scope here \
     (effect handler invoked outside an action-triggered path)";

/// The action in scope for an effect handler.
///
/// Handlers reached outside an action-triggered path receive
/// [`ActionSlot::PLACEHOLDER`]. Reading anything from the placeholder is a
/// programmer error and panics immediately; use [`ActionSlot::invocation`]
/// when a handler legitimately needs to check.
#[derive(Clone, Debug)]
pub enum ActionSlot {
    Invocation(Action),
    Placeholder,
}

impl ActionSlot {
    pub const PLACEHOLDER: Self = Self::Placeholder;

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Returns the invocation without panicking.
    pub fn invocation(&self) -> Option<&Action> {
        match self {
            Self::Invocation(action) => Some(action),
            Self::Placeholder => None,
        }
    }

    fn action(&self) -> &Action {
        match self {
            Self::Invocation(action) => action,
            Self::Placeholder => placeholder_accessed(),
        }
    }

    fn action_mut(&mut self) -> &mut Action {
        match self {
            Self::Invocation(action) => action,
            Self::Placeholder => placeholder_accessed(),
        }
    }

    pub fn user(&self) -> EntityId {
        self.action().user()
    }

    pub fn name(&self) -> &str {
        self.action().name()
    }

    pub fn tier(&self) -> u8 {
        self.action().tier()
    }

    pub fn values(&self) -> &BTreeMap<String, f64> {
        self.action().values()
    }

    pub fn values_mut(&mut self) -> &mut BTreeMap<String, f64> {
        self.action_mut().values_mut()
    }

    pub fn times_used(&self) -> u32 {
        self.action().times_used()
    }

    pub fn times_repeated(&self) -> u32 {
        self.action().times_repeated()
    }

    pub fn extra(&self) -> Option<&ActionExtra> {
        self.action().extra()
    }

    pub fn record_use(&mut self) {
        self.action_mut().record_use();
    }

    pub fn record_repeat(&mut self) {
        self.action_mut().record_repeat();
    }

    pub fn reset(&mut self) {
        self.action_mut().reset();
    }
}

impl From<Action> for ActionSlot {
    fn from(action: Action) -> Self {
        Self::Invocation(action)
    }
}

#[cold]
#[track_caller]
fn placeholder_accessed() -> ! {
    panic!("{PLACEHOLDER_MESSAGE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_delegates_to_action() {
        let mut slot = ActionSlot::from(Action::new(EntityId(2), "heal", 1));
        slot.record_use();
        assert_eq!(slot.name(), "heal");
        assert_eq!(slot.times_used(), 1);
        assert!(!slot.is_placeholder());
    }

    #[test]
    fn placeholder_can_be_checked_without_panicking() {
        let slot = ActionSlot::PLACEHOLDER;
        assert!(slot.is_placeholder());
        assert!(slot.invocation().is_none());
    }

    #[test]
    #[should_panic(expected = "placeholder")]
    fn placeholder_user_panics() {
        let _ = ActionSlot::PLACEHOLDER.user();
    }

    #[test]
    #[should_panic(expected = "placeholder")]
    fn placeholder_name_panics() {
        let _ = ActionSlot::PLACEHOLDER.name().len();
    }

    #[test]
    #[should_panic(expected = "placeholder")]
    fn placeholder_tier_panics() {
        let _ = ActionSlot::PLACEHOLDER.tier();
    }

    #[test]
    #[should_panic(expected = "placeholder")]
    fn placeholder_values_panic() {
        let _ = ActionSlot::PLACEHOLDER.values().len();
    }

    #[test]
    #[should_panic(expected = "placeholder")]
    fn placeholder_counters_panic() {
        let _ = ActionSlot::PLACEHOLDER.times_repeated();
    }

    #[test]
    #[should_panic(expected = "placeholder")]
    fn placeholder_extra_panics() {
        let _ = ActionSlot::PLACEHOLDER.extra().is_some();
    }

    #[test]
    #[should_panic(expected = "placeholder")]
    fn placeholder_reset_panics() {
        let mut slot = ActionSlot::PLACEHOLDER;
        slot.reset();
    }
}
