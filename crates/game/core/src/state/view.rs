//! Read-only view of persisted game state consulted by event resolution.

use crate::event::ResolveError;

use super::types::{CurrencyType, ItemRef, QuestRef, SwitchRef, TitleRef, VariableRef};

/// Snapshot of player state that values and conditions read from.
///
/// Only currency balances have settled lookup semantics. The remaining
/// lookups are extension points: their provided implementations fail with
/// [`ResolveError::NotImplemented`] until a state backend overrides them,
/// so a script that depends on them crashes loudly instead of branching on
/// a made-up default.
pub trait GameStateView: Send + Sync {
    /// Current balance for `kind`, or `None` when nothing was ever recorded.
    fn currency(&self, kind: CurrencyType) -> Option<i32>;

    /// Saved numeric variable written by a story script.
    fn saved_variable(&self, variable: &VariableRef) -> Result<i32, ResolveError> {
        Err(ResolveError::not_implemented(format!(
            "saved variable lookup ({variable})"
        )))
    }

    /// Number of `item` held in the inventory.
    fn inventory_count(&self, item: &ItemRef) -> Result<i32, ResolveError> {
        Err(ResolveError::not_implemented(format!(
            "inventory count lookup ({item})"
        )))
    }

    /// Whether the player holds `title`.
    fn has_title(&self, title: &TitleRef) -> Result<bool, ResolveError> {
        Err(ResolveError::not_implemented(format!(
            "player title check ({title})"
        )))
    }

    /// Whether `quest` has been completed.
    fn quest_completed(&self, quest: &QuestRef) -> Result<bool, ResolveError> {
        Err(ResolveError::not_implemented(format!(
            "quest completion check ({quest})"
        )))
    }

    /// Value of a saved boolean switch.
    fn saved_switch(&self, switch: &SwitchRef) -> Result<bool, ResolveError> {
        Err(ResolveError::not_implemented(format!(
            "saved switch lookup ({switch})"
        )))
    }
}

/// Fixed in-memory state view, mostly useful for tests and previews.
#[derive(Clone, Debug, Default)]
pub struct StaticStateView {
    pub currencies: super::types::CurrencyMap,
}

impl StaticStateView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_currency(mut self, kind: CurrencyType, balance: i32) -> Self {
        self.currencies.insert(kind, balance);
        self
    }
}

impl GameStateView for StaticStateView {
    fn currency(&self, kind: CurrencyType) -> Option<i32> {
        self.currencies.get(&kind).copied()
    }
}
