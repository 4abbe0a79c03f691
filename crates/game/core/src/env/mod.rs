//! Collaborators the rules read from while evaluating.
//!
//! The [`EvalEnv`] aggregate bundles a random source with a read-only state
//! view so resolvers can access everything they need without hard coupling
//! to concrete implementations.
mod rng;

pub use rng::{PcgRng, RandomSource, SequenceRng};

use crate::state::GameStateView;

/// Borrowed random source and state snapshot used by value/condition resolution.
#[derive(Clone, Copy)]
pub struct EvalEnv<'a> {
    rng: &'a dyn RandomSource,
    state: &'a dyn GameStateView,
}

impl<'a> EvalEnv<'a> {
    pub fn new(rng: &'a dyn RandomSource, state: &'a dyn GameStateView) -> Self {
        Self { rng, state }
    }

    /// Returns the random source.
    pub fn rng(&self) -> &'a dyn RandomSource {
        self.rng
    }

    /// Returns the read-only state view.
    pub fn state(&self) -> &'a dyn GameStateView {
        self.state
    }
}

impl core::fmt::Debug for EvalEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EvalEnv").finish_non_exhaustive()
    }
}
