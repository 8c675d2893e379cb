//! Random number capability injected into the simulation.
//!
//! The engine never reaches for a global generator; it draws through a
//! [`RandomSource`] so tests can swap in fixed or scripted values.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

pub type SimRng = StdRng;

/// Source of independent uniform draws.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// Uniform angle in `[0, 2π)`.
    fn angle(&mut self) -> f32 {
        // Guard against unit() * TAU rounding up to exactly TAU
        let angle = self.unit() * TAU;
        if angle >= TAU { 0.0 } else { angle }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn unit(&mut self) -> f32 {
        (**self).unit()
    }

    fn angle(&mut self) -> f32 {
        (**self).angle()
    }
}

/// Entropy-seeded generator used by the running application.
#[derive(Debug, Clone)]
pub struct SimRandom {
    rng: SimRng,
}

impl SimRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: SimRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SimRng::seed_from_u64(seed),
        }
    }
}

impl Default for SimRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for SimRandom {
    fn unit(&mut self) -> f32 {
        self.rng.r#gen::<f32>()
    }

    fn angle(&mut self) -> f32 {
        self.rng.gen_range(0.0..TAU)
    }
}

/// Returns the same value for every draw.
///
/// The value is returned verbatim, so a source fixed at `1.0` is allowed even
/// though it lies outside `[0, 1)`; it models a draw that never beats any
/// propensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSource(pub f32);

impl RandomSource for FixedSource {
    fn unit(&mut self) -> f32 {
        self.0
    }
}

/// Replays a list of values, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceSource {
    /// An empty list behaves like a source fixed at zero.
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn unit(&mut self) -> f32 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
