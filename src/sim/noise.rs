//! Smooth 1D noise source for organic pacing
//!
//! The pacing engine only needs a pure `phase -> [0, 1]` function, so tests can
//! swap in a closure while the game uses fractal Perlin noise.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

/// Pure, continuous 1D noise in [0, 1]
pub trait Noise1D {
    fn sample(&self, phase: f32) -> f32;
}

impl<F: Fn(f32) -> f32> Noise1D for F {
    fn sample(&self, phase: f32) -> f32 {
        self(phase)
    }
}

/// Octave count and falloff match a classic sketch-style noise
const OCTAVES: usize = 4;
const PERSISTENCE: f64 = 0.5;
/// Off-lattice row so integer phases do not all land on zero
const ROW: f64 = 0.371;

/// Fractal Perlin noise mapped into [0, 1]
pub struct PerlinNoise1D {
    fbm: Fbm<Perlin>,
}

impl PerlinNoise1D {
    pub fn new(seed: u32) -> Self {
        let fbm = Fbm::<Perlin>::new(seed)
            .set_octaves(OCTAVES)
            .set_frequency(1.0)
            .set_persistence(PERSISTENCE);
        Self { fbm }
    }
}

impl Default for PerlinNoise1D {
    fn default() -> Self {
        Self::new(0)
    }
}

impl std::fmt::Debug for PerlinNoise1D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerlinNoise1D").finish_non_exhaustive()
    }
}

impl Noise1D for PerlinNoise1D {
    fn sample(&self, phase: f32) -> f32 {
        let raw = self.fbm.get([phase as f64, ROW]);
        ((raw * 0.5 + 0.5) as f32).clamp(0.0, 1.0)
    }
}
