//! Deterministic lattice hash noise.
//!
//! Every sample is `fract(sin(x * 12.9898 + y * 78.233 + seed) * 43758.5453)`.
//! The sine comes from `libm` rather than the platform libc so the same
//! inputs hash to the same bits on every target.

const X_SCRAMBLE: f64 = 12.9898;
const Y_SCRAMBLE: f64 = 78.233;
const SPREAD: f64 = 43758.5453;

/// Seeded scalar hash noise over the integer lattice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseField {
    seed: f64,
}

impl NoiseField {
    /// Create a noise field perturbed by `seed`.
    pub fn new(seed: f64) -> Self {
        Self { seed }
    }

    /// The seed this field hashes with.
    pub fn seed(&self) -> f64 {
        self.seed
    }

    /// Sample the lattice point `(x, y)`. Returns a value in `[0, 1)`.
    #[inline]
    pub fn sample(&self, x: i64, y: i64) -> f64 {
        hash(x as f64, y as f64, self.seed)
    }

    /// Hash an arbitrary real coordinate without interpolation.
    ///
    /// Used for sparse high-frequency masks (glow specks, lava vents) where
    /// the per-texel decorrelation is the point.
    #[inline]
    pub fn sample_point(&self, x: f64, y: f64) -> f64 {
        hash(x, y, self.seed)
    }
}

/// Hash `(x, y, seed)` to `[0, 1)`.
#[inline]
pub fn hash(x: f64, y: f64, seed: f64) -> f64 {
    let n = libm::sin(x * X_SCRAMBLE + y * Y_SCRAMBLE + seed) * SPREAD;
    let f = n - libm::floor(n);
    // Tiny negative n rounds `n - floor(n)` up to exactly 1.0.
    if f >= 1.0 { 0.0 } else { f }
}
