//! Random sources.
//!
//! Every draw the engine makes goes through [`RandomSource`], so the process
//! entropy can be swapped for a seeded generator or a scripted sequence
//! without changing any other behavior.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of bounded random integers.
pub trait RandomSource {
    /// Return an integer in `[0, bound)`. A `bound` of zero yields zero.
    fn next_int(&mut self, bound: u32) -> u32;

    /// Draw from the inclusive range `low..=high`.
    fn between(&mut self, low: u32, high: u32) -> u32 {
        debug_assert!(low <= high, "empty range {low}..={high}");
        low + self.next_int(high - low + 1)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_int(&mut self, bound: u32) -> u32 {
        (**self).next_int(bound)
    }
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    /// Generator seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Reproducible generator: the same seed always yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RngSource<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_int(&mut self, bound: u32) -> u32 {
        if bound == 0 { 0 } else { self.rng.gen_range(0..bound) }
    }
}

/// Replays a fixed cycle of values, each reduced modulo the requested bound.
///
/// Meant for tests that assert exact outputs. The sequence must contain
/// enough distinct values for the draw being made, otherwise completion
/// keeps rejecting duplicates forever.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self { values: values.into_iter().collect(), cursor: 0 }
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_int(&mut self, bound: u32) -> u32 {
        if bound == 0 || self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % bound
    }
}
