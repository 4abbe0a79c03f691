//! Integer-valued expressions used by event scripts.

use crate::state::{CurrencyType, ItemRef, VariableRef};

/// Integer expression evaluated against the current game state.
///
/// Values are immutable and resolved lazily on every evaluation; nothing is
/// cached, so a `RandomInt` yields a fresh draw each time it is resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventValue {
    /// Fixed value.
    Constant(i32),

    /// Uniform draw from `start..=end_inclusive`.
    RandomInt { start: i32, end_inclusive: i32 },

    /// Saved story variable.
    SavedVariable(VariableRef),

    /// Current balance of a currency (zero when absent).
    Currency(CurrencyType),

    /// Held quantity of an inventory item.
    Inventory(ItemRef),
}

impl EventValue {
    pub fn constant(value: i32) -> Self {
        Self::Constant(value)
    }

    pub fn random(start: i32, end_inclusive: i32) -> Self {
        Self::RandomInt {
            start,
            end_inclusive,
        }
    }

    /// Returns true if resolving this value consumes entropy.
    pub fn is_random(&self) -> bool {
        matches!(self, Self::RandomInt { .. })
    }
}

impl From<i32> for EventValue {
    fn from(value: i32) -> Self {
        Self::Constant(value)
    }
}
