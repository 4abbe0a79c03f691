//! Process-wide random source backed by `rand`.
use std::sync::Mutex;

use game_core::RandomSource;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::config::RuntimeConfig;

/// [`RandomSource`] over a mutex-guarded `StdRng`.
///
/// Shared by every context of a session; a fixed seed replays the same
/// draws in the same order.
pub struct StdRandom {
    rng: Mutex<StdRng>,
}

impl StdRandom {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Seeded when `rng_seed` is set, otherwise from OS entropy.
    pub fn from_config(config: &RuntimeConfig) -> Self {
        match config.rng_seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for StdRandom {
    fn next_u32(&self) -> u32 {
        // A panic while holding the lock cannot leave StdRng half-updated.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.next_u32()
    }
}

impl std::fmt::Debug for StdRandom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdRandom").finish_non_exhaustive()
    }
}
