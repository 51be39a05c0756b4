//! Texture synthesis: runs the biome classifier over the fixed equirectangular
//! grid and packs the results into five RGBA8 channel images.
//!
//! Synthesis is synchronous and runs once per session. The resulting
//! [`TextureSet`] is immutable and can be shared freely across threads.

use std::time::Instant;

use image::{Rgba, RgbaImage};
use nova_config::{ConfigError, GenerationConfig};
use rand::Rng;
use tracing::{debug, info};

use crate::biome::{Biome, BiomeClassifier, to_byte};

/// Texture width in texels (longitude).
pub const TEXTURE_WIDTH: u32 = 1024;
/// Texture height in texels (latitude).
pub const TEXTURE_HEIGHT: u32 = 512;

/// Upper bound (exclusive) for randomly drawn seeds.
pub const RANDOM_SEED_RANGE: f64 = 100.0;

/// One of the five output bitmaps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureChannel {
    /// Surface albedo.
    Color,
    /// Grey-scale bump height.
    Bump,
    /// Grey-scale roughness.
    Roughness,
    /// Base emissive color (night lights, lava, bioluminescence).
    Emissive,
    /// White cloud layer with coverage in alpha.
    Cloud,
}

impl TextureChannel {
    /// All channels in export order.
    pub const ALL: [TextureChannel; 5] = [
        TextureChannel::Color,
        TextureChannel::Bump,
        TextureChannel::Roughness,
        TextureChannel::Emissive,
        TextureChannel::Cloud,
    ];

    /// Stable lowercase name, also used for exported file names.
    pub fn name(&self) -> &'static str {
        match self {
            TextureChannel::Color => "color",
            TextureChannel::Bump => "bump",
            TextureChannel::Roughness => "roughness",
            TextureChannel::Emissive => "emissive",
            TextureChannel::Cloud => "cloud",
        }
    }
}

/// Texel counts per biome for a synthesized set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BiomeStats {
    counts: [u64; Biome::ALL.len()],
}

impl BiomeStats {
    /// Record one texel.
    pub fn record(&mut self, biome: Biome) {
        self.counts[biome.index()] += 1;
    }

    /// Texels classified as `biome`.
    pub fn count(&self, biome: Biome) -> u64 {
        self.counts[biome.index()]
    }

    /// Total texels recorded.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Share of texels classified as `biome`, `0.0` when empty.
    pub fn fraction(&self, biome: Biome) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.count(biome) as f64 / total as f64
        }
    }

    /// Share of ocean texels.
    pub fn ocean_fraction(&self) -> f64 {
        self.fraction(Biome::Ocean)
    }

    /// Share of snow and polar ice texels.
    pub fn frozen_fraction(&self) -> f64 {
        Biome::ALL
            .iter()
            .filter(|b| b.is_frozen())
            .map(|&b| self.fraction(b))
            .sum()
    }
}

/// The complete, immutable planet texture set.
#[derive(Clone, Debug)]
pub struct TextureSet {
    seed: f64,
    color: RgbaImage,
    bump: RgbaImage,
    roughness: RgbaImage,
    emissive: RgbaImage,
    cloud: RgbaImage,
    stats: BiomeStats,
}

impl TextureSet {
    /// Seed the set was generated from.
    pub fn seed(&self) -> f64 {
        self.seed
    }

    /// Image for a named channel.
    pub fn channel(&self, channel: TextureChannel) -> &RgbaImage {
        match channel {
            TextureChannel::Color => &self.color,
            TextureChannel::Bump => &self.bump,
            TextureChannel::Roughness => &self.roughness,
            TextureChannel::Emissive => &self.emissive,
            TextureChannel::Cloud => &self.cloud,
        }
    }

    /// Iterate `(channel, image)` pairs in export order.
    pub fn channels(&self) -> impl Iterator<Item = (TextureChannel, &RgbaImage)> {
        TextureChannel::ALL.into_iter().map(|c| (c, self.channel(c)))
    }

    /// Per-biome texel counts.
    pub fn stats(&self) -> &BiomeStats {
        &self.stats
    }

    /// `(width, height)` shared by every channel.
    pub fn dimensions(&self) -> (u32, u32) {
        self.color.dimensions()
    }
}

/// Draw a session seed in `[0, RANDOM_SEED_RANGE)`.
pub fn random_seed() -> f64 {
    rand::rng().random_range(0.0..RANDOM_SEED_RANGE)
}

/// Use the configured seed, or draw a random one.
pub fn resolve_seed(configured: Option<f64>) -> f64 {
    configured.unwrap_or_else(random_seed)
}

/// Drives the [`BiomeClassifier`] across the full texture grid.
#[derive(Clone, Debug)]
pub struct TextureSynthesizer {
    classifier: BiomeClassifier,
}

impl TextureSynthesizer {
    /// Create a synthesizer for an explicit seed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the config fails validation.
    pub fn new(seed: f64, config: &GenerationConfig) -> Result<Self, ConfigError> {
        let classifier = BiomeClassifier::new(seed, config)?;
        Ok(Self { classifier })
    }

    /// Create a synthesizer using the configured seed, or a random one.
    pub fn from_config(config: &GenerationConfig) -> Result<Self, ConfigError> {
        Self::new(resolve_seed(config.seed), config)
    }

    /// The classifier driving this synthesizer.
    pub fn classifier(&self) -> &BiomeClassifier {
        &self.classifier
    }

    /// Seed in use.
    pub fn seed(&self) -> f64 {
        self.classifier.seed()
    }

    /// Generate all five channels. Blocks until every texel is written.
    pub fn synthesize(&self) -> TextureSet {
        let start = Instant::now();
        let seed = self.seed();
        info!(
            seed,
            width = TEXTURE_WIDTH,
            height = TEXTURE_HEIGHT,
            "Synthesizing planet textures"
        );

        let mut color = RgbaImage::new(TEXTURE_WIDTH, TEXTURE_HEIGHT);
        let mut bump = RgbaImage::new(TEXTURE_WIDTH, TEXTURE_HEIGHT);
        let mut roughness = RgbaImage::new(TEXTURE_WIDTH, TEXTURE_HEIGHT);
        let mut emissive = RgbaImage::new(TEXTURE_WIDTH, TEXTURE_HEIGHT);
        let mut cloud = RgbaImage::new(TEXTURE_WIDTH, TEXTURE_HEIGHT);
        let mut stats = BiomeStats::default();

        for y in 0..TEXTURE_HEIGHT {
            let v = y as f64 / TEXTURE_HEIGHT as f64;
            for x in 0..TEXTURE_WIDTH {
                let u = x as f64 / TEXTURE_WIDTH as f64;
                let texel = self.classifier.classify(u, v);
                stats.record(texel.biome);

                let [r, g, b] = texel.color;
                color.put_pixel(x, y, Rgba([r, g, b, 255]));

                bump.put_pixel(x, y, Rgba([texel.bump, texel.bump, texel.bump, 255]));

                let rough = to_byte(texel.roughness as f64 * 255.0);
                roughness.put_pixel(x, y, Rgba([rough, rough, rough, 255]));

                let [er, eg, eb] = texel.emissive;
                emissive.put_pixel(x, y, Rgba([er, eg, eb, 255]));

                let alpha = self.classifier.cloud_alpha(u, v);
                cloud.put_pixel(x, y, Rgba([255, 255, 255, alpha]));
            }
        }

        for biome in Biome::ALL {
            debug!(
                biome = biome.name(),
                texels = stats.count(biome),
                fraction = stats.fraction(biome),
                "Biome coverage"
            );
        }
        info!(
            seed,
            ocean_fraction = stats.ocean_fraction(),
            frozen_fraction = stats.frozen_fraction(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Planet textures ready"
        );

        TextureSet {
            seed,
            color,
            bump,
            roughness,
            emissive,
            cloud,
            stats,
        }
    }
}
