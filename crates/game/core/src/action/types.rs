//! In-progress action invocation record.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::state::EntityId;

/// Opaque payload attached to an action for effect handlers.
pub type ActionExtra = Arc<dyn Any + Send + Sync>;

/// A skill or function invocation as the combat engine tracks it across turns.
///
/// The engine bumps the usage counters and rewrites `values` as turns elapse,
/// and calls [`Action::reset`] between independent uses.
#[derive(Clone)]
pub struct Action {
    user: EntityId,
    name: String,
    tier: u8,
    values: BTreeMap<String, f64>,
    times_used: u32,
    times_repeated: u32,
    extra: Option<ActionExtra>,
}

impl Action {
    pub fn new(user: EntityId, name: impl Into<String>, tier: u8) -> Self {
        Self {
            user,
            name: name.into(),
            tier,
            values: BTreeMap::new(),
            times_used: 0,
            times_repeated: 0,
            extra: None,
        }
    }

    pub fn with_value(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn with_extra<T: Any + Send + Sync>(mut self, extra: T) -> Self {
        self.extra = Some(Arc::new(extra));
        self
    }

    pub fn user(&self) -> EntityId {
        self.user
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Power level of this invocation.
    pub fn tier(&self) -> u8 {
        self.tier
    }

    pub fn values(&self) -> &BTreeMap<String, f64> {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut BTreeMap<String, f64> {
        &mut self.values
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn set_value(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    /// Adds `delta` to a value, treating a missing key as zero. Returns the new value.
    pub fn adjust_value(&mut self, key: impl Into<String>, delta: f64) -> f64 {
        let entry = self.values.entry(key.into()).or_insert(0.0);
        *entry += delta;
        *entry
    }

    pub fn times_used(&self) -> u32 {
        self.times_used
    }

    pub fn times_repeated(&self) -> u32 {
        self.times_repeated
    }

    pub fn record_use(&mut self) {
        self.times_used = self.times_used.saturating_add(1);
    }

    pub fn record_repeat(&mut self) {
        self.times_repeated = self.times_repeated.saturating_add(1);
    }

    pub fn extra(&self) -> Option<&ActionExtra> {
        self.extra.as_ref()
    }

    /// Typed access to the extra payload; `None` when absent or of another type.
    pub fn extra_as<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.extra.as_deref().and_then(|extra| extra.downcast_ref::<T>())
    }

    pub fn set_extra(&mut self, extra: Option<ActionExtra>) {
        self.extra = extra;
    }

    /// Clears per-use state: values, the repeat counter and the extra payload.
    ///
    /// `times_used` survives resets; it counts uses across the whole encounter.
    pub fn reset(&mut self) {
        self.values.clear();
        self.times_repeated = 0;
        self.extra = None;
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("user", &self.user)
            .field("name", &self.name)
            .field("tier", &self.tier)
            .field("values", &self.values)
            .field("times_used", &self.times_used)
            .field("times_repeated", &self.times_repeated)
            .field("extra", &self.extra.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct ComboState {
        chain: u8,
    }

    #[test]
    fn counters_and_values_track_turns() {
        let mut action = Action::new(EntityId(3), "flurry", 2).with_value("hits", 1.0);
        action.record_use();
        action.record_repeat();
        action.record_repeat();
        assert_eq!(action.adjust_value("hits", 2.0), 3.0);
        assert_eq!(action.adjust_value("bonus", 0.5), 0.5);

        assert_eq!(action.user(), EntityId(3));
        assert_eq!(action.tier(), 2);
        assert_eq!(action.times_used(), 1);
        assert_eq!(action.times_repeated(), 2);
        assert_eq!(action.value("hits"), Some(3.0));
    }

    #[test]
    fn reset_clears_per_use_state_only() {
        let mut action = Action::new(EntityId(1), "guard", 1)
            .with_value("stacks", 4.0)
            .with_extra(ComboState { chain: 2 });
        action.record_use();
        action.record_repeat();
        assert_eq!(action.extra_as::<ComboState>(), Some(&ComboState { chain: 2 }));
        assert_eq!(action.extra_as::<String>(), None);

        action.reset();
        assert!(action.values().is_empty());
        assert_eq!(action.times_repeated(), 0);
        assert!(action.extra().is_none());
        assert_eq!(action.times_used(), 1);
    }
}
