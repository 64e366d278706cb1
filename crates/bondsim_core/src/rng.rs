//! Seeded random number generator for draw simulation.
//!
//! This module provides [`DrawRng`], a seeded PRNG wrapper that offers
//! reproducible random number generation plus the per-trial seed
//! derivation that keeps parallel trials statistically independent.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draw simulation random number generator.
///
/// Wraps a seeded [`StdRng`] behind the two integer-sampling operations
/// the kernel needs. The seed is stored so runs can log and reproduce it.
///
/// Each trial gets its own `DrawRng` derived from a run-level base seed
/// via [`for_trial`](Self::for_trial); generators are never shared across
/// trials or workers, which is the invariant that keeps Monte Carlo
/// trials independent.
///
/// # Examples
///
/// ```rust
/// use bondsim_core::DrawRng;
///
/// let mut rng1 = DrawRng::from_seed(12345);
/// let mut rng2 = DrawRng::from_seed(12345);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.gen_outcome(21_000), rng2.gen_outcome(21_000));
/// ```
pub struct DrawRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility).
    seed: u64,
}

impl DrawRng {
    /// Creates a generator initialised with the given seed.
    ///
    /// The same seed always produces the same sequence, enabling
    /// reproducible simulations.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Derives the generator for one trial of a run.
    ///
    /// The trial id is folded into the base seed through a splitmix64
    /// finaliser, so consecutive trial ids map to uncorrelated streams
    /// and the stream for a given `(base_seed, trial_id)` pair is fixed
    /// no matter which worker executes the trial.
    #[inline]
    pub fn for_trial(base_seed: u64, trial_id: u32) -> Self {
        let stream = base_seed.wrapping_add((trial_id as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::from_seed(splitmix64(stream))
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a uniform integer in `[0, odds)`.
    ///
    /// The draw engine treats zero as the winning outcome, making each
    /// call a Bernoulli(1/odds) win check.
    #[inline]
    pub fn gen_outcome(&mut self, odds: u32) -> u32 {
        self.inner.gen_range(0..odds)
    }

    /// Draws a uniform index in `[0, bound)`.
    #[inline]
    pub fn gen_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}

/// splitmix64 finaliser (Steele, Lea & Flood), used to decorrelate
/// sequential trial ids before seeding.
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = DrawRng::from_seed(42);
        let mut b = DrawRng::from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.gen_outcome(21_000), b.gen_outcome(21_000));
        }
    }

    #[test]
    fn test_trial_streams_differ() {
        let mut a = DrawRng::for_trial(42, 0);
        let mut b = DrawRng::for_trial(42, 1);
        let seq_a: Vec<u32> = (0..32).map(|_| a.gen_outcome(1_000)).collect();
        let seq_b: Vec<u32> = (0..32).map(|_| b.gen_outcome(1_000)).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn test_trial_stream_is_scheduling_invariant() {
        // Re-deriving the same (base, trial) pair yields the same stream.
        let mut a = DrawRng::for_trial(7, 123);
        let mut b = DrawRng::for_trial(7, 123);
        assert_eq!(a.gen_index(1_000_000), b.gen_index(1_000_000));
        assert_eq!(a.seed(), b.seed());
    }

    #[test]
    fn test_gen_outcome_range() {
        let mut rng = DrawRng::from_seed(1);
        for _ in 0..1_000 {
            assert!(rng.gen_outcome(21) < 21);
        }
    }
}
