//! Random sources for event resolution and combat rolls.
//!
//! This module provides a trait-based RNG system. Sources use interior
//! mutability so a single instance can be shared by every resolver and
//! combat step of a playback session.
//!
//! # Determinism
//!
//! Seeded implementations must be deterministic: given the same seed,
//! they must produce the same sequence of random numbers. Tests and replays
//! rely on this to reproduce branch decisions exactly.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Source of entropy consumed by value resolution and combat.
pub trait RandomSource: Send + Sync {
    /// Draw the next raw 32-bit value.
    fn next_u32(&self) -> u32;

    /// Draw a 64-bit value from two consecutive 32-bit draws (high word first).
    fn next_u64(&self) -> u64 {
        let high = self.next_u32() as u64;
        let low = self.next_u32() as u64;
        (high << 32) | low
    }

    /// Generate a uniformly distributed value in `[start, end]` inclusive.
    ///
    /// Uses rejection sampling so every value in the range is exactly
    /// equally likely. Returns `start` when `start >= end`.
    fn range_inclusive(&self, start: i32, end: i32) -> i32 {
        if start >= end {
            return start;
        }
        let span = (end as i64 - start as i64) as u64 + 1;
        // 2^64 mod span: draws at or above u64::MAX - rem + 1 would bias the low values.
        let rem = (u64::MAX % span + 1) % span;
        loop {
            let draw = self.next_u64();
            if rem == 0 || draw <= u64::MAX - rem {
                return (start as i64 + (draw % span) as i64) as i32;
            }
        }
    }

    /// Returns true with the given probability (clamped to `0.0..=1.0`).
    fn chance(&self, probability: f64) -> bool {
        if probability <= 0.0 {
            return false;
        }
        if probability >= 1.0 {
            return true;
        }
        // 53 random bits mapped onto [0, 1).
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        unit < probability
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG is a family of simple, fast, space-efficient RNGs with excellent
/// statistical quality. This implementation uses PCG-XSH-RR, which produces
/// 32-bit output from 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same sequence
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits, advanced atomically
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Debug)]
pub struct PcgRng {
    state: AtomicU64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator whose sequence is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: AtomicU64::new(seed),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::seeded(0)
    }
}

impl RandomSource for PcgRng {
    fn next_u32(&self) -> u32 {
        let previous = match self.state.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |s| {
            Some(Self::pcg_step(s))
        }) {
            Ok(previous) | Err(previous) => previous,
        };
        Self::pcg_output(Self::pcg_step(previous))
    }
}

/// Replays a fixed list of raw draws, cycling when exhausted.
///
/// Counts every draw so tests can observe how much entropy an evaluation
/// consumed and in which order.
#[derive(Debug, Default)]
pub struct SequenceRng {
    values: Vec<u32>,
    cursor: AtomicUsize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Number of raw 32-bit draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }
}

impl RandomSource for SequenceRng {
    fn next_u32(&self) -> u32 {
        if self.values.is_empty() {
            self.cursor.fetch_add(1, Ordering::Relaxed);
            return 0;
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[index % self.values.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic_per_seed() {
        let a = PcgRng::seeded(42);
        let b = PcgRng::seeded(42);
        let first: Vec<u32> = (0..16).map(|_| a.next_u32()).collect();
        let second: Vec<u32> = (0..16).map(|_| b.next_u32()).collect();
        assert_eq!(first, second);

        let other = PcgRng::seeded(43);
        let third: Vec<u32> = (0..16).map(|_| other.next_u32()).collect();
        assert_ne!(first, third);
    }

    #[test]
    fn range_inclusive_covers_both_bounds() {
        let rng = PcgRng::seeded(7);
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            let value = rng.range_inclusive(-1, 2);
            assert!((-1..=2).contains(&value));
            seen[(value + 1) as usize] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn range_inclusive_handles_full_i32_span() {
        let rng = PcgRng::seeded(99);
        for _ in 0..100 {
            // Must not overflow or panic.
            let _ = rng.range_inclusive(i32::MIN, i32::MAX);
        }
    }

    #[test]
    fn degenerate_range_returns_start_without_drawing() {
        let rng = SequenceRng::new([5]);
        assert_eq!(rng.range_inclusive(3, 3), 3);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn chance_extremes_are_exact() {
        let rng = PcgRng::seeded(1);
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn sequence_rng_cycles_and_counts() {
        let rng = SequenceRng::new([1, 2]);
        assert_eq!(rng.next_u32(), 1);
        assert_eq!(rng.next_u32(), 2);
        assert_eq!(rng.next_u32(), 1);
        assert_eq!(rng.draws(), 3);
        assert_eq!(rng.next_u64(), (2u64 << 32) | 1);
    }
}
