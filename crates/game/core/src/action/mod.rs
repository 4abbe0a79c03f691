//! Action invocations tracked by the combat/effect engine.
//!
//! [`Action`] is the mutable per-invocation record; [`ActionSlot`] is what
//! effect handlers receive, including the placeholder used when no action
//! is in scope.
mod slot;
mod types;

pub use slot::ActionSlot;
pub use types::{Action, ActionExtra};
