//! Random sources
//!
//! `RngSource` adapts any `rand::Rng` to the `RandomSource` seam. It is used
//! for real runs, seeded or from entropy. `ScriptedSource` replays a fixed
//! list of values and is meant for tests.

use super::traits::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// `RandomSource` backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng + Send> RngSource<R> {
    /// Wrap an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Deterministic source for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeded source when a seed is given, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..high)
    }
}

/// `RandomSource` that replays a fixed sequence
///
/// Each draw pops the next scripted value and clamps it into the requested
/// half-open range, so a value at or above `high` comes back as the largest
/// `f64` below it. Once the script is exhausted it returns the lower bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<f64>,
}

impl ScriptedSource {
    /// Create a source that yields `values` in order
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of values not yet drawn
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        match self.values.pop_front() {
            Some(value) if high > low => value.clamp(low, largest_below(high)),
            _ => low,
        }
    }
}

// Largest f64 strictly below a finite or infinite `high`
fn largest_below(high: f64) -> f64 {
    if high > 0.0 {
        f64::from_bits(high.to_bits() - 1)
    } else if high == 0.0 {
        -f64::from_bits(1)
    } else {
        f64::from_bits(high.to_bits() + 1)
    }
}
