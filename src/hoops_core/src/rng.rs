//! Injectable randomness.
//!
//! Simulation code draws only through [`RandomSource`], so a seeded
//! generator reproduces a tournament exactly and tests can script draws.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait RandomSource {
    /// Next uniform value in [0, 1).
    fn next_uniform(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

impl RandomSource for ChaCha8Rng {
    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Seeded generator, or one drawn from OS entropy when `seed` is `None`.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Uniform integer in `1..=max`; `max` must be at least 1.
pub fn uniform_int_inclusive<R: RandomSource + ?Sized>(rng: &mut R, max: u32) -> u32 {
    let draw = (rng.next_uniform() * max as f64).floor() as u32;
    draw.min(max.saturating_sub(1)) + 1
}
