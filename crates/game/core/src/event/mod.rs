//! Event script expressions and their evaluation.
//!
//! - [`EventValue`] resolves to an integer
//! - [`EventCondition`] resolves to a boolean and decides script branches
//! - [`EffectEvent`] describes an applied effect for the presentation layer
mod condition;
mod effect;
mod error;
mod evaluate;
mod value;

pub use condition::{Comparator, EventCondition};
pub use effect::EffectEvent;
pub use error::ResolveError;
pub use evaluate::{resolve_condition, resolve_value};
pub use value::EventValue;
