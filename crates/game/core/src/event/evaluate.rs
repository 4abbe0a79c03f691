//! Value and condition evaluation.
//!
//! This module implements the evaluation of [`EventValue`] and
//! [`EventCondition`] expressions within an [`EvalEnv`].

use crate::env::EvalEnv;

use super::condition::EventCondition;
use super::error::ResolveError;
use super::value::EventValue;

// ============================================================================
// Value Evaluation
// ============================================================================

/// Resolve a value to an integer.
///
/// ## Supported Values
/// - `Constant`: Fixed value
/// - `RandomInt`: Fresh uniform draw from the environment's random source
/// - `Currency`: Current balance, `0` when never recorded
/// - `SavedVariable` / `Inventory`: Delegated to the state view, whose
///   default lookups fail with `NotImplemented`
///
/// ## Error Handling
/// - `InvalidRange` if a random range is empty
/// - `NotImplemented` for lookups the state backend does not provide
pub fn resolve_value(value: &EventValue, env: &EvalEnv<'_>) -> Result<i32, ResolveError> {
    match value {
        EventValue::Constant(value) => Ok(*value),

        EventValue::RandomInt {
            start,
            end_inclusive,
        } => {
            if start > end_inclusive {
                return Err(ResolveError::InvalidRange {
                    start: *start,
                    end: *end_inclusive,
                });
            }
            Ok(env.rng().range_inclusive(*start, *end_inclusive))
        }

        EventValue::Currency(kind) => Ok(env.state().currency(*kind).unwrap_or(0)),

        EventValue::SavedVariable(variable) => env.state().saved_variable(variable),

        EventValue::Inventory(item) => env.state().inventory_count(item),
    }
}

// ============================================================================
// Condition Evaluation
// ============================================================================

/// Resolve a condition to a boolean.
///
/// `Compare` resolves `value1` strictly before `value2`, so two random
/// operands consume draws in script order and a seeded source reproduces
/// the same branch on every run. Combinators evaluate left to right and
/// short-circuit; skipped operands consume no entropy.
pub fn resolve_condition(
    condition: &EventCondition,
    env: &EvalEnv<'_>,
) -> Result<bool, ResolveError> {
    match condition {
        EventCondition::True => Ok(true),
        EventCondition::False => Ok(false),

        EventCondition::Compare {
            value1,
            value2,
            comparator,
        } => {
            let lhs = resolve_value(value1, env)?;
            let rhs = resolve_value(value2, env)?;
            Ok(comparator.apply(lhs, rhs))
        }

        EventCondition::PlayerTitle(title) => env.state().has_title(title),

        EventCondition::QuestCompleted(quest) => env.state().quest_completed(quest),

        EventCondition::SavedSwitch(switch) => env.state().saved_switch(switch),

        EventCondition::Not(inner) => Ok(!resolve_condition(inner, env)?),

        EventCondition::All(conditions) => {
            for condition in conditions {
                if !resolve_condition(condition, env)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }

        EventCondition::Any(conditions) => {
            for condition in conditions {
                if resolve_condition(condition, env)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
    }
}

impl EventValue {
    /// Shorthand for [`resolve_value`].
    pub fn resolve(&self, env: &EvalEnv<'_>) -> Result<i32, ResolveError> {
        resolve_value(self, env)
    }
}

impl EventCondition {
    /// Shorthand for [`resolve_condition`].
    pub fn evaluate(&self, env: &EvalEnv<'_>) -> Result<bool, ResolveError> {
        resolve_condition(self, env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, SequenceRng};
    use crate::event::Comparator;
    use crate::state::{
        CurrencyType, GameStateView, ItemRef, QuestRef, StaticStateView, SwitchRef, TitleRef,
        VariableRef,
    };

    fn env<'a>(rng: &'a dyn crate::env::RandomSource, state: &'a dyn GameStateView) -> EvalEnv<'a> {
        EvalEnv::new(rng, state)
    }

    #[test]
    fn constant_resolves_to_itself() {
        let rng = SequenceRng::new([]);
        let state = StaticStateView::new();
        for value in [i32::MIN, -7, 0, 1, 25, i32::MAX] {
            assert_eq!(resolve_value(&EventValue::Constant(value), &env(&rng, &state)), Ok(value));
        }
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn random_int_stays_in_bounds_and_is_uniform() {
        let rng = PcgRng::seeded(0x5eed);
        let state = StaticStateView::new();
        let env = env(&rng, &state);
        let value = EventValue::random(1, 6);

        let trials = 60_000;
        let mut counts = [0u32; 6];
        for _ in 0..trials {
            let rolled = value.resolve(&env).expect("valid range");
            assert!((1..=6).contains(&rolled), "out of range: {rolled}");
            counts[(rolled - 1) as usize] += 1;
        }

        // Chi-square with 5 degrees of freedom; 20.52 is the 0.999 quantile.
        let expected = trials as f64 / 6.0;
        let chi_square: f64 = counts
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();
        assert!(chi_square < 20.52, "chi-square {chi_square} for {counts:?}");
    }

    #[test]
    fn random_int_draws_fresh_every_time() {
        let rng = SequenceRng::new([0, 1, 0, 2, 0, 3]);
        let state = StaticStateView::new();
        let env = env(&rng, &state);
        let value = EventValue::random(0, 9);

        assert_eq!(value.resolve(&env), Ok(1));
        assert_eq!(value.resolve(&env), Ok(2));
        assert_eq!(value.resolve(&env), Ok(3));
    }

    #[test]
    fn empty_random_range_is_rejected() {
        let rng = SequenceRng::new([]);
        let state = StaticStateView::new();
        assert_eq!(
            EventValue::random(5, 4).resolve(&env(&rng, &state)),
            Err(ResolveError::InvalidRange { start: 5, end: 4 })
        );
    }

    #[test]
    fn currency_defaults_to_zero() {
        let rng = SequenceRng::new([]);
        let state = StaticStateView::new().with_currency(CurrencyType::Gold, 1_250);
        let env = env(&rng, &state);

        assert_eq!(EventValue::Currency(CurrencyType::Gold).resolve(&env), Ok(1_250));
        assert_eq!(EventValue::Currency(CurrencyType::Gem).resolve(&env), Ok(0));
    }

    #[test]
    fn unimplemented_lookups_fail_loudly() {
        let rng = SequenceRng::new([]);
        let state = StaticStateView::new();
        let env = env(&rng, &state);

        let values = [
            EventValue::SavedVariable(VariableRef::new("met_elder")),
            EventValue::Inventory(ItemRef::new("potion")),
        ];
        for value in &values {
            let err = value.resolve(&env).expect_err("lookup has no backend");
            assert!(err.is_not_implemented(), "{err}");
        }

        let conditions = [
            EventCondition::PlayerTitle(TitleRef::new("dragonslayer")),
            EventCondition::QuestCompleted(QuestRef::new("rats")),
            EventCondition::SavedSwitch(SwitchRef::new("gate_open")),
        ];
        for condition in &conditions {
            let err = condition.evaluate(&env).expect_err("lookup has no backend");
            assert!(err.is_not_implemented(), "{err}");
        }
    }

    #[test]
    fn state_view_can_override_extension_points() {
        struct Switches;
        impl GameStateView for Switches {
            fn currency(&self, _kind: CurrencyType) -> Option<i32> {
                None
            }
            fn saved_switch(&self, switch: &SwitchRef) -> Result<bool, ResolveError> {
                Ok(switch.as_str() == "gate_open")
            }
        }

        let rng = SequenceRng::new([]);
        let env = env(&rng, &Switches);
        assert_eq!(
            EventCondition::SavedSwitch(SwitchRef::new("gate_open")).evaluate(&env),
            Ok(true)
        );
    }

    #[test]
    fn compare_constants_end_to_end() {
        let rng = SequenceRng::new([]);
        let state = StaticStateView::new();
        let env = env(&rng, &state);

        let greater = EventCondition::compare(3, Comparator::Greater, 5);
        let less = EventCondition::compare(3, Comparator::Less, 5);
        assert_eq!(greater.evaluate(&env), Ok(false));
        assert_eq!(less.evaluate(&env), Ok(true));
    }

    #[test]
    fn compare_resolves_first_operand_first() {
        // Each RandomInt(0, 9) consumes two raw draws: high word 0, low word n.
        let rng = SequenceRng::new([0, 2, 0, 8]);
        let state = StaticStateView::new();
        let env = env(&rng, &state);

        let condition = EventCondition::compare(
            EventValue::random(0, 9),
            Comparator::Less,
            EventValue::random(0, 9),
        );
        // value1 = 2, value2 = 8; swapped order would give 8 < 2.
        assert_eq!(condition.evaluate(&env), Ok(true));
        assert_eq!(rng.draws(), 4);
    }

    #[test]
    fn combinators_short_circuit() {
        let rng = SequenceRng::new([0, 1]);
        let state = StaticStateView::new();
        let env = env(&rng, &state);
        let random_check = EventCondition::compare(EventValue::random(0, 9), Comparator::Equal, 1);

        let all = EventCondition::All(vec![EventCondition::False, random_check.clone()]);
        assert_eq!(all.evaluate(&env), Ok(false));
        let any = EventCondition::Any(vec![EventCondition::True, random_check.clone()]);
        assert_eq!(any.evaluate(&env), Ok(true));
        assert_eq!(rng.draws(), 0);

        assert_eq!(EventCondition::All(vec![]).evaluate(&env), Ok(true));
        assert_eq!(EventCondition::Any(vec![]).evaluate(&env), Ok(false));
        assert_eq!(random_check.negate().evaluate(&env), Ok(false));
        assert_eq!(rng.draws(), 2);
    }
}
