//! Multi-octave fractal Brownian motion (fBm) over [`NoiseField`].
//!
//! Octave `i` samples the lattice at frequency `2^i` with amplitude
//! `0.5^(i + 1)`. Within each lattice cell the four corner values are blended
//! bilinearly with the cubic weight `t²(3 − 2t)`, which keeps the field
//! continuous across cell boundaries.

use crate::noise::NoiseField;

/// Default number of octaves.
pub const DEFAULT_OCTAVES: u32 = 6;

const START_AMPLITUDE: f64 = 0.5;
const START_FREQUENCY: f64 = 1.0;
const PERSISTENCE: f64 = 0.5;
const LACUNARITY: f64 = 2.0;

/// Fractal sum of smoothly interpolated lattice noise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalField {
    noise: NoiseField,
    octaves: u32,
}

impl FractalField {
    /// Create a fractal field over `seed` with the given octave count.
    pub fn new(seed: f64, octaves: u32) -> Self {
        Self {
            noise: NoiseField::new(seed),
            octaves,
        }
    }

    /// Number of octaves summed per sample.
    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    /// Sample the field at `(u, v)`.
    ///
    /// Typically lands in `[0, 1]` but is not clamped; the upper bound is
    /// [`max_amplitude`](Self::max_amplitude).
    pub fn sample(&self, u: f64, v: f64) -> f64 {
        let mut value = 0.0;
        let mut amplitude = START_AMPLITUDE;
        let mut frequency = START_FREQUENCY;

        for _ in 0..self.octaves {
            value += self.octave(u * frequency, v * frequency) * amplitude;
            amplitude *= PERSISTENCE;
            frequency *= LACUNARITY;
        }

        value
    }

    /// Geometric sum of all octave amplitudes.
    pub fn max_amplitude(&self) -> f64 {
        let mut sum = 0.0;
        let mut amp = START_AMPLITUDE;
        for _ in 0..self.octaves {
            sum += amp;
            amp *= PERSISTENCE;
        }
        sum
    }

    fn octave(&self, x: f64, y: f64) -> f64 {
        let cell_x = x.floor();
        let cell_y = y.floor();
        let fx = x - cell_x;
        let fy = y - cell_y;
        let ix = cell_x as i64;
        let iy = cell_y as i64;

        let a = self.noise.sample(ix, iy);
        let b = self.noise.sample(ix + 1, iy);
        let c = self.noise.sample(ix, iy + 1);
        let d = self.noise.sample(ix + 1, iy + 1);

        let ux = smooth_weight(fx);
        let uy = smooth_weight(fy);

        lerp(lerp(a, b, ux), lerp(c, d, ux), uy)
    }
}

/// Cubic ease `t²(3 − 2t)`, zero slope at both ends.
#[inline]
pub fn smooth_weight(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}
