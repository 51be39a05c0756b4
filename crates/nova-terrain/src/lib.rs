//! Procedural planet surface: lattice noise, fBm, biome classification,
//! and the five-channel texture synthesis pipeline.

mod async_synthesis;
mod export;
mod fractal;
mod noise;
mod synth;

pub mod biome;

pub use async_synthesis::{AsyncTextureSynthesis, SynthesisError, SynthesizedTextures};
pub use biome::{Biome, BiomeClassifier, BiomeThresholds, TexelRecord};
pub use export::{ExportError, export_png};
pub use fractal::{DEFAULT_OCTAVES, FractalField, smooth_weight};
pub use noise::NoiseField;
pub use synth::{
    BiomeStats, RANDOM_SEED_RANGE, TEXTURE_HEIGHT, TEXTURE_WIDTH, TextureChannel, TextureSet,
    TextureSynthesizer, random_seed, resolve_seed,
};
