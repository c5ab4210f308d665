//! Random source used by the match simulator.
//!
//! All nondeterminism in a run flows through one [`RandomSource`]. Any
//! `rand::Rng` works (seed a `StdRng` for reproducible runs); tests that
//! need exact scores use [`ScriptedSource`].

use rand::Rng;

#[cfg(test)]
#[path = "random_tests.rs"]
mod random_tests;

pub trait RandomSource {
    /// Uniform draw in `[0, 1)`
    fn unit(&mut self) -> f64;

    /// Uniform integer in `[low, high]`, both inclusive. `low <= high`.
    fn between(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        self.gen_range(low..=high)
    }
}

/// Replays fixed sequences of draws.
///
/// `unit` and `between` each walk their own list and wrap around when they
/// reach the end. Integer draws are clamped into the requested range, so a
/// script never yields an out-of-range score. An empty list yields the
/// lower bound (or `0.0`).
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    units: Vec<f64>,
    ints: Vec<u32>,
    unit_pos: usize,
    int_pos: usize,
}

impl ScriptedSource {
    pub fn new(units: Vec<f64>, ints: Vec<u32>) -> Self {
        Self {
            units,
            ints,
            unit_pos: 0,
            int_pos: 0,
        }
    }

    /// Number of `unit` and `between` draws consumed so far
    pub fn consumed(&self) -> (usize, usize) {
        (self.unit_pos, self.int_pos)
    }
}

impl RandomSource for ScriptedSource {
    fn unit(&mut self) -> f64 {
        if self.units.is_empty() {
            return 0.0;
        }
        let value = self.units[self.unit_pos % self.units.len()];
        self.unit_pos += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        if self.ints.is_empty() {
            return low;
        }
        let value = self.ints[self.int_pos % self.ints.len()];
        self.int_pos += 1;
        value.clamp(low, high)
    }
}
