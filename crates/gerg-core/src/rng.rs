//! Deterministic RNG wrapper and the uniform-draw contract consumed by the sampler.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform variates on `[0, 1)`.
///
/// The sampler consumes this stream in a fixed order: for every sweep it
/// walks the off-diagonal cells row-major, each cell drawing uniforms in
/// pairs for its normal variates, and finally takes one uniform for the
/// joint accept/reject decision. Any implementation that replays the same
/// sequence reproduces the chain bit for bit.
pub trait UniformSource {
    /// Returns the next uniform variate in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

/// Deterministic RNG handle exposed to sampler consumers.
///
/// The handle is a thin wrapper around `StdRng` seeded from a caller
/// supplied `seed: u64`. Uniforms come from `Rng::gen::<f64>()`, which
/// samples the half-open interval `[0, 1)`.
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
}

impl RngHandle {
    /// Creates a new RNG handle from a master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl UniformSource for RngHandle {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

impl<U: UniformSource + ?Sized> UniformSource for &mut U {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}
