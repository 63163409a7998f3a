//! Injectable randomness for the fallback scorer.
//!
//! The fallback perturbs every course score by a small uniform value so
//! that identical base scores don't always resolve the same way. Tests swap
//! in [`NoJitter`] or [`SeededJitter`] to make the output reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Exclusive upper bound of a single perturbation
pub const JITTER_BOUND: f64 = 0.1;

/// A source of perturbations in `[0, JITTER_BOUND)`
pub trait JitterSource: Send {
    fn next_jitter(&mut self) -> f64;
}

/// Draws from the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadJitter;

impl JitterSource for ThreadJitter {
    fn next_jitter(&mut self) -> f64 {
        rand::rng().random::<f64>() * JITTER_BOUND
    }
}

/// Reproducible jitter from a seeded RNG
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl JitterSource for SeededJitter {
    fn next_jitter(&mut self) -> f64 {
        self.rng.random::<f64>() * JITTER_BOUND
    }
}

/// Always zero
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn next_jitter(&mut self) -> f64 {
        0.0
    }
}
