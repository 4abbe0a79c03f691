//! Boolean expressions that decide event branches.

use crate::state::{QuestRef, SwitchRef, TitleRef};

use super::value::EventValue;

/// Ordering/equality test applied to two resolved values.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Comparator {
    Equal,
    NotEqual,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl Comparator {
    /// Applies the comparison as `lhs <op> rhs`.
    pub fn apply(self, lhs: i32, rhs: i32) -> bool {
        match self {
            Self::Equal => lhs == rhs,
            Self::NotEqual => lhs != rhs,
            Self::Greater => lhs > rhs,
            Self::GreaterOrEqual => lhs >= rhs,
            Self::Less => lhs < rhs,
            Self::LessOrEqual => lhs <= rhs,
        }
    }
}

/// Condition for event branches.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventCondition {
    True,
    False,

    /// `value1 <comparator> value2`; `value1` always resolves first.
    Compare {
        value1: EventValue,
        value2: EventValue,
        comparator: Comparator,
    },

    /// Player holds the title.
    PlayerTitle(TitleRef),

    /// Quest has been completed.
    QuestCompleted(QuestRef),

    /// Saved switch is on.
    SavedSwitch(SwitchRef),

    /// Condition must be false.
    Not(Box<EventCondition>),

    /// All conditions must be true (left to right, stops at the first false).
    All(Vec<EventCondition>),

    /// Any condition must be true (left to right, stops at the first true).
    Any(Vec<EventCondition>),
}

impl EventCondition {
    pub fn compare(
        value1: impl Into<EventValue>,
        comparator: Comparator,
        value2: impl Into<EventValue>,
    ) -> Self {
        Self::Compare {
            value1: value1.into(),
            value2: value2.into(),
            comparator,
        }
    }

    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }
}

impl From<bool> for EventCondition {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn comparators_cover_ordering_and_equality() {
        let expected = [
            (Comparator::Equal, [false, true, false]),
            (Comparator::NotEqual, [true, false, true]),
            (Comparator::Greater, [false, false, true]),
            (Comparator::GreaterOrEqual, [false, true, true]),
            (Comparator::Less, [true, false, false]),
            (Comparator::LessOrEqual, [true, true, false]),
        ];
        assert_eq!(Comparator::iter().count(), expected.len());
        for (comparator, results) in expected {
            assert_eq!(comparator.apply(1, 2), results[0], "{comparator} 1 2");
            assert_eq!(comparator.apply(2, 2), results[1], "{comparator} 2 2");
            assert_eq!(comparator.apply(3, 2), results[2], "{comparator} 3 2");
        }
    }

    #[test]
    fn comparator_names_parse() {
        assert_eq!("greater_or_equal".parse::<Comparator>(), Ok(Comparator::GreaterOrEqual));
        assert_eq!(Comparator::NotEqual.to_string(), "not_equal");
    }
}
