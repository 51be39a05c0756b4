//! Biome classification: maps a surface coordinate to a [`TexelRecord`].
//!
//! The decision runs in a fixed order. Height is built from the continent
//! field, raised by equatorial archipelagos and steepened near the poles,
//! then split into ocean and land. Land is banded by altitude into beach,
//! vegetation, mountain, and snow, with sparse emissive features (crystal
//! plains, bioluminescent jungle, lava vents) layered on top. Finally the
//! polar ice caps overwrite everything beyond the configured latitudes.
//!
//! The cloud layer is an independent field and does not interact with
//! classification.

use nova_config::{ConfigError, GenerationConfig};

use crate::fractal::FractalField;
use crate::noise::NoiseField;

// Seed offsets decorrelate the auxiliary fields from the continent field.
const ARCHIPELAGO_SEED_OFFSET: f64 = 20.0;
const VEGETATION_SEED_OFFSET: f64 = 50.0;
const CRYSTAL_SEED_OFFSET: f64 = 80.0;
const BIOLUMINESCENCE_SEED_OFFSET: f64 = 90.0;
const LAVA_SEED_OFFSET: f64 = 10.0;
const CLOUD_SEED_OFFSET: f64 = 100.0;

const CONTINENT_FREQUENCY: f64 = 4.0;
const ARCHIPELAGO_FREQUENCY: f64 = 15.0;
const VEGETATION_FREQUENCY: f64 = 5.0;
const CRYSTAL_FREQUENCY: f64 = 50.0;
const BIOLUMINESCENCE_FREQUENCY: f64 = 60.0;
const LAVA_FREQUENCY: f64 = 40.0;
const CLOUD_FREQUENCY: f64 = 8.0;

const ARCHIPELAGO_MASK_MIN: f64 = 0.6;
const ARCHIPELAGO_NOISE_MIN: f64 = 0.6;
const ARCHIPELAGO_HEIGHT_SCALE: f64 = 0.9;

const POLAR_BOOST_BAND: f64 = 0.1;
const POLAR_BOOST_GAIN: f64 = 0.4;
const POLAR_BOOST_SCALE: f64 = 10.0;

const VEGETATION_SPLIT: f64 = 0.5;
const CRYSTAL_CHANCE: f64 = 0.85;
const BIOLUMINESCENCE_CHANCE: f64 = 0.65;
const LAVA_CHANCE: f64 = 0.7;
const LAVA_MIN_ALTITUDE: f64 = 0.6;

const CLOUD_THRESHOLD: f64 = 0.55;
const CLOUD_GAIN: f64 = 2.5;

const OCEAN_ROUGHNESS: f32 = 0.2;
const OCEAN_BUMP_SCALE: f64 = 0.5;
const LAND_ROUGHNESS: f32 = 0.8;
const SNOW_ROUGHNESS: f32 = 0.3;
const ICE_ROUGHNESS: f32 = 0.1;
const ICE_BUMP: u8 = 150;

/// Surface palette in sRGB bytes.
pub mod palette {
    pub const DEEP_OCEAN: [u8; 3] = [10, 10, 60];
    pub const SHALLOW_OCEAN: [u8; 3] = [30, 50, 120];
    pub const BEACH: [u8; 3] = [194, 178, 128];
    pub const FOREST: [u8; 3] = [10, 80, 20];
    pub const JUNGLE: [u8; 3] = [5, 50, 10];
    pub const MOUNTAIN: [u8; 3] = [80, 70, 60];
    pub const VOLCANIC_ROCK: [u8; 3] = [20, 5, 5];
    pub const SNOW: [u8; 3] = [240, 250, 255];

    pub const NO_GLOW: [u8; 3] = [0, 0, 0];
    pub const CRYSTAL_GLOW: [u8; 3] = [0, 60, 100];
    pub const BIOLUMINESCENT_GLOW: [u8; 3] = [20, 240, 160];
    pub const LAVA_GLOW: [u8; 3] = [255, 80, 10];
}

/// Visual classification bucket of a texel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Biome {
    Ocean,
    Beach,
    /// Emerald forests with occasional crystal plains.
    Forest,
    /// Dense jungle with bioluminescent undergrowth.
    Jungle,
    Mountain,
    /// Dark rock around an active lava vent.
    VolcanicRock,
    /// High-altitude snow.
    Snow,
    /// Forced polar ice cap.
    PolarIce,
}

impl Biome {
    /// Every biome, in declaration order.
    pub const ALL: [Biome; 8] = [
        Biome::Ocean,
        Biome::Beach,
        Biome::Forest,
        Biome::Jungle,
        Biome::Mountain,
        Biome::VolcanicRock,
        Biome::Snow,
        Biome::PolarIce,
    ];

    /// Stable snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            Biome::Ocean => "ocean",
            Biome::Beach => "beach",
            Biome::Forest => "forest",
            Biome::Jungle => "jungle",
            Biome::Mountain => "mountain",
            Biome::VolcanicRock => "volcanic_rock",
            Biome::Snow => "snow",
            Biome::PolarIce => "polar_ice",
        }
    }

    /// Position in [`Biome::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// `true` for snow and polar ice.
    pub fn is_frozen(&self) -> bool {
        matches!(self, Biome::Snow | Biome::PolarIce)
    }
}

/// Everything the texture channels need for one texel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TexelRecord {
    /// Resolved biome.
    pub biome: Biome,
    /// Final height after archipelago, polar boost, and clamping.
    pub height: f64,
    /// Surface albedo.
    pub color: [u8; 3],
    /// Bump map value.
    pub bump: u8,
    /// Roughness in `[0, 1]`.
    pub roughness: f32,
    /// Base emissive color before the day/night multiplier.
    pub emissive: [u8; 3],
}

/// Water level, altitude bands, and ice cap latitudes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiomeThresholds {
    pub water_level: f64,
    pub beach_altitude: f64,
    pub vegetation_altitude: f64,
    pub mountain_altitude: f64,
    pub polar_north: f64,
    pub polar_south: f64,
}

impl Default for BiomeThresholds {
    fn default() -> Self {
        Self::from(&GenerationConfig::default())
    }
}

impl From<&GenerationConfig> for BiomeThresholds {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            water_level: config.water_level,
            beach_altitude: config.beach_altitude,
            vegetation_altitude: config.vegetation_altitude,
            mountain_altitude: config.mountain_altitude,
            polar_north: config.polar_north,
            polar_south: config.polar_south,
        }
    }
}

impl BiomeThresholds {
    /// Normalized altitude above the water line; negative under water.
    pub fn altitude(&self, height: f64) -> f64 {
        (height - self.water_level) / (1.0 - self.water_level)
    }

    /// `true` when `v` lies inside either forced ice cap.
    pub fn is_polar_cap(&self, v: f64) -> bool {
        v < self.polar_north || v > self.polar_south
    }
}

/// Seeded biome classifier for normalized surface coordinates.
///
/// `u` runs west to east in `[0, 1)`, `v` north to south in `[0, 1)`.
#[derive(Clone, Debug)]
pub struct BiomeClassifier {
    seed: f64,
    thresholds: BiomeThresholds,
    continents: FractalField,
    archipelago: FractalField,
    clouds: FractalField,
    vegetation: NoiseField,
    crystals: NoiseField,
    bioluminescence: NoiseField,
    lava: NoiseField,
}

impl BiomeClassifier {
    /// Build a classifier from a validated generation config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the config fails validation.
    pub fn new(seed: f64, config: &GenerationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_thresholds(
            seed,
            config.octaves,
            BiomeThresholds::from(config),
        ))
    }

    /// Build a classifier without config validation.
    pub fn with_thresholds(seed: f64, octaves: u32, thresholds: BiomeThresholds) -> Self {
        Self {
            seed,
            thresholds,
            continents: FractalField::new(seed, octaves),
            archipelago: FractalField::new(seed + ARCHIPELAGO_SEED_OFFSET, octaves),
            clouds: FractalField::new(seed + CLOUD_SEED_OFFSET, octaves),
            vegetation: NoiseField::new(seed + VEGETATION_SEED_OFFSET),
            crystals: NoiseField::new(seed + CRYSTAL_SEED_OFFSET),
            bioluminescence: NoiseField::new(seed + BIOLUMINESCENCE_SEED_OFFSET),
            lava: NoiseField::new(seed + LAVA_SEED_OFFSET),
        }
    }

    /// Seed used by every field.
    pub fn seed(&self) -> f64 {
        self.seed
    }

    /// Thresholds in effect.
    pub fn thresholds(&self) -> &BiomeThresholds {
        &self.thresholds
    }

    /// Classify the texel at `(u, v)`.
    pub fn classify(&self, u: f64, v: f64) -> TexelRecord {
        self.classify_with_height(u, v, self.surface_height(u, v))
    }

    /// Surface height at `(u, v)` with archipelagos and the polar boost
    /// applied, clamped to `[0, 1]`.
    pub fn surface_height(&self, u: f64, v: f64) -> f64 {
        let mut h = self
            .continents
            .sample(u * CONTINENT_FREQUENCY, v * CONTINENT_FREQUENCY);

        let equator_distance = (v - 0.5).abs() * 2.0;
        let archipelago_mask = 1.0 - equator_distance * equator_distance;
        if archipelago_mask > ARCHIPELAGO_MASK_MIN {
            let islands = self
                .archipelago
                .sample(u * ARCHIPELAGO_FREQUENCY, v * ARCHIPELAGO_FREQUENCY);
            if islands > ARCHIPELAGO_NOISE_MIN {
                h = h.max(islands * ARCHIPELAGO_HEIGHT_SCALE);
            }
        }

        if v < POLAR_BOOST_BAND || v > 1.0 - POLAR_BOOST_BAND {
            let pole_distance = if v < 0.5 { v } else { 1.0 - v };
            let scaled = pole_distance * POLAR_BOOST_SCALE;
            h += POLAR_BOOST_GAIN * scaled * scaled;
        }

        h.clamp(0.0, 1.0)
    }

    /// Classify `(u, v)` given an already computed surface height.
    ///
    /// `u` and `v` still drive the auxiliary noise and the polar override.
    pub fn classify_with_height(&self, u: f64, v: f64, height: f64) -> TexelRecord {
        let t = &self.thresholds;

        let mut record = if height < t.water_level {
            let depth = height / t.water_level;
            TexelRecord {
                biome: Biome::Ocean,
                height,
                color: lerp_color(palette::DEEP_OCEAN, palette::SHALLOW_OCEAN, depth),
                bump: to_byte(height * OCEAN_BUMP_SCALE),
                roughness: OCEAN_ROUGHNESS,
                emissive: palette::NO_GLOW,
            }
        } else {
            self.classify_land(u, v, height, t.altitude(height))
        };

        if t.is_polar_cap(v) {
            record.biome = Biome::PolarIce;
            record.color = palette::SNOW;
            record.roughness = ICE_ROUGHNESS;
            record.bump = ICE_BUMP;
            record.emissive = palette::NO_GLOW;
        }

        record
    }

    fn classify_land(&self, u: f64, v: f64, height: f64, altitude: f64) -> TexelRecord {
        let t = &self.thresholds;
        let mut record = TexelRecord {
            biome: Biome::Beach,
            height,
            color: palette::BEACH,
            bump: to_byte(height * 255.0),
            roughness: LAND_ROUGHNESS,
            emissive: palette::NO_GLOW,
        };

        if altitude < t.beach_altitude {
            return record;
        }

        if altitude < t.vegetation_altitude {
            let selector = self
                .vegetation
                .sample_point(u * VEGETATION_FREQUENCY, v * VEGETATION_FREQUENCY);
            if selector > VEGETATION_SPLIT {
                record.biome = Biome::Forest;
                record.color = palette::FOREST;
                let sparkle = self
                    .crystals
                    .sample_point(u * CRYSTAL_FREQUENCY, v * CRYSTAL_FREQUENCY);
                if sparkle > CRYSTAL_CHANCE {
                    record.emissive = palette::CRYSTAL_GLOW;
                }
            } else {
                record.biome = Biome::Jungle;
                record.color = palette::JUNGLE;
                let glow = self
                    .bioluminescence
                    .sample_point(u * BIOLUMINESCENCE_FREQUENCY, v * BIOLUMINESCENCE_FREQUENCY);
                if glow > BIOLUMINESCENCE_CHANCE {
                    record.emissive = palette::BIOLUMINESCENT_GLOW;
                }
            }
            return record;
        }

        if altitude < t.mountain_altitude {
            record.biome = Biome::Mountain;
            record.color = palette::MOUNTAIN;
            let vent = self
                .lava
                .sample_point(u * LAVA_FREQUENCY, v * LAVA_FREQUENCY);
            if vent > LAVA_CHANCE && altitude > LAVA_MIN_ALTITUDE {
                record.biome = Biome::VolcanicRock;
                record.color = palette::VOLCANIC_ROCK;
                record.emissive = palette::LAVA_GLOW;
            }
            return record;
        }

        record.biome = Biome::Snow;
        record.color = palette::SNOW;
        record.roughness = SNOW_ROUGHNESS;
        record
    }

    /// Cloud opacity at `(u, v)` in `[0, 255]`.
    pub fn cloud_alpha(&self, u: f64, v: f64) -> u8 {
        let density = self
            .clouds
            .sample(u * CLOUD_FREQUENCY + self.seed, v * CLOUD_FREQUENCY);
        if density > CLOUD_THRESHOLD {
            to_byte((density - CLOUD_THRESHOLD) * CLOUD_GAIN * 255.0)
        } else {
            0
        }
    }
}

/// Round and saturate to a byte.
#[inline]
pub(crate) fn to_byte(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn lerp_color(a: [u8; 3], b: [u8; 3], t: f64) -> [u8; 3] {
    std::array::from_fn(|i| to_byte(a[i] as f64 * (1.0 - t) + b[i] as f64 * t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn classifier(seed: f64) -> BiomeClassifier {
        BiomeClassifier::new(seed, &GenerationConfig::default()).unwrap()
    }

    fn random_seeds(count: usize) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        (0..count).map(|_| rng.random_range(0.0..100.0)).collect()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GenerationConfig {
            beach_altitude: 0.5,
            vegetation_altitude: 0.4,
            ..Default::default()
        };
        assert!(BiomeClassifier::new(1.0, &config).is_err());
    }

    #[test]
    fn test_north_pole_texel_is_ice_for_any_seed() {
        for seed in random_seeds(50) {
            let record = classifier(seed).classify(0.5, 0.02);
            assert_eq!(record.biome, Biome::PolarIce, "seed {seed}");
            assert_eq!(record.emissive, [0, 0, 0], "seed {seed}");
            assert_eq!(record.color, palette::SNOW);
            assert_eq!(record.bump, 150);
            assert_eq!(record.roughness, 0.1);
        }
    }

    #[test]
    fn test_polar_override_is_absolute() {
        let c = classifier(33.0);
        for i in 0..256 {
            let u = i as f64 / 256.0;
            for v in [0.0, 0.03, 0.079, 0.921, 0.96, 0.999] {
                let record = c.classify(u, v);
                assert_eq!(record.biome, Biome::PolarIce, "({u}, {v})");
                assert_eq!(record.emissive, palette::NO_GLOW, "({u}, {v})");
            }
        }
        // Even forced heights that would be ocean or lava stay ice.
        for h in [0.0, 0.3, 0.61, 0.9, 1.0] {
            assert_eq!(c.classify_with_height(0.2, 0.01, h).biome, Biome::PolarIce);
            assert_eq!(c.classify_with_height(0.2, 0.99, h).biome, Biome::PolarIce);
        }
    }

    #[test]
    fn test_water_level_splits_ocean() {
        let c = classifier(4.0);
        let below = c.classify_with_height(0.3, 0.5, 0.599);
        let above = c.classify_with_height(0.3, 0.5, 0.6);
        assert_eq!(below.biome, Biome::Ocean);
        assert_ne!(above.biome, Biome::Ocean);
        assert_eq!(above.biome, Biome::Beach);
    }

    #[test]
    fn test_ocean_record_attributes() {
        let c = classifier(4.0);
        let deep = c.classify_with_height(0.3, 0.5, 0.0);
        assert_eq!(deep.color, palette::DEEP_OCEAN);
        assert_eq!(deep.roughness, 0.2);
        assert_eq!(deep.bump, 0);
        assert_eq!(deep.emissive, palette::NO_GLOW);

        let shallow = c.classify_with_height(0.3, 0.5, 0.5999);
        assert_eq!(shallow.color, palette::SHALLOW_OCEAN);
    }

    #[test]
    fn test_altitude_bands_hold_for_every_seed() {
        for seed in random_seeds(10) {
            let c = classifier(seed);
            let t = *c.thresholds();
            for i in 0..64 {
                let u = i as f64 / 64.0;
                for j in 0..32 {
                    let v = 0.1 + 0.8 * j as f64 / 32.0;
                    let record = c.classify(u, v);
                    if record.biome == Biome::Ocean {
                        assert!(record.height < t.water_level);
                        continue;
                    }
                    let altitude = t.altitude(record.height);
                    let allowed: &[Biome] = if altitude < 0.05 {
                        &[Biome::Beach]
                    } else if altitude < 0.45 {
                        &[Biome::Forest, Biome::Jungle]
                    } else if altitude < 0.75 {
                        &[Biome::Mountain, Biome::VolcanicRock]
                    } else {
                        &[Biome::Snow]
                    };
                    assert!(
                        allowed.contains(&record.biome),
                        "seed {seed} ({u}, {v}): altitude {altitude} gave {:?}",
                        record.biome
                    );
                }
            }
        }
    }

    #[test]
    fn test_forced_heights_follow_bands() {
        let c = classifier(12.0);
        let t = *c.thresholds();
        for k in 0..=400 {
            let h = t.water_level + (1.0 - t.water_level) * k as f64 / 400.0;
            let altitude = t.altitude(h);
            let biome = c.classify_with_height(0.37, 0.45, h).biome;
            match biome {
                Biome::Beach => assert!(altitude < 0.05, "{altitude}"),
                Biome::Forest | Biome::Jungle => {
                    assert!((0.05..0.45).contains(&altitude), "{altitude}")
                }
                Biome::Mountain => assert!((0.45..0.75).contains(&altitude), "{altitude}"),
                Biome::VolcanicRock => assert!((0.6..0.75).contains(&altitude), "{altitude}"),
                Biome::Snow => assert!(altitude >= 0.75, "{altitude}"),
                other => panic!("unexpected land biome {other:?} at altitude {altitude}"),
            }
        }
    }

    #[test]
    fn test_snow_is_smoother_than_rock() {
        let c = classifier(8.0);
        let snow = c.classify_with_height(0.1, 0.5, 0.99);
        assert_eq!(snow.biome, Biome::Snow);
        assert_eq!(snow.roughness, 0.3);
        assert_eq!(snow.bump, 252);
    }

    #[test]
    fn test_only_expected_glow_colors() {
        let c = classifier(27.0);
        for i in 0..512 {
            for j in 0..64 {
                let record = c.classify(i as f64 / 512.0, 0.1 + 0.8 * j as f64 / 64.0);
                let expected = match record.biome {
                    Biome::Forest => &[palette::NO_GLOW, palette::CRYSTAL_GLOW][..],
                    Biome::Jungle => &[palette::NO_GLOW, palette::BIOLUMINESCENT_GLOW][..],
                    Biome::VolcanicRock => &[palette::LAVA_GLOW][..],
                    _ => &[palette::NO_GLOW][..],
                };
                assert!(
                    expected.contains(&record.emissive),
                    "{:?} has unexpected glow {:?}",
                    record.biome,
                    record.emissive
                );
            }
        }
    }

    #[test]
    fn test_vegetation_splits_between_forest_and_jungle() {
        let c = classifier(55.0);
        let mut forest = 0;
        let mut jungle = 0;
        for i in 0..200 {
            for j in 0..100 {
                let u = i as f64 / 200.0;
                let v = 0.1 + 0.8 * j as f64 / 100.0;
                match c.classify_with_height(u, v, 0.75).biome {
                    Biome::Forest => forest += 1,
                    Biome::Jungle => jungle += 1,
                    other => panic!("altitude 0.375 should be vegetation, got {other:?}"),
                }
            }
        }
        let ratio = forest as f64 / (forest + jungle) as f64;
        assert!(
            (0.35..0.65).contains(&ratio),
            "Forest/jungle split should be near 50/50, got {ratio}"
        );
    }

    #[test]
    fn test_ocean_fraction_plausible_across_seeds() {
        for seed in random_seeds(12) {
            let c = classifier(seed);
            let (w, h) = (128, 64);
            let mut ocean = 0;
            for y in 0..h {
                for x in 0..w {
                    let record = c.classify(x as f64 / w as f64, y as f64 / h as f64);
                    if record.biome == Biome::Ocean {
                        ocean += 1;
                    }
                }
            }
            let fraction = ocean as f64 / (w * h) as f64;
            assert!(
                (0.30..=0.85).contains(&fraction),
                "Seed {seed} produced implausible ocean fraction {fraction}"
            );
        }
    }

    #[test]
    fn test_surface_height_is_clamped() {
        let c = classifier(91.0);
        for i in 0..100 {
            for v in [0.0, 0.05, 0.099, 0.5, 0.901, 0.95] {
                let h = c.surface_height(i as f64 / 100.0, v);
                assert!((0.0..=1.0).contains(&h), "height {h} out of range at v={v}");
            }
        }
    }

    #[test]
    fn test_polar_boost_steepens_toward_poles() {
        // v = 0.09 and 0.91 sit inside the boost band, outside the forced cap
        // and far from the archipelago belt, so only the boost applies.
        let mut unclamped = 0;
        for seed in [19.0, 47.5] {
            let c = classifier(seed);
            for i in 0..128 {
                let u = i as f64 / 128.0;
                for v in [0.09, 0.91] {
                    let base = c.continents.sample(u * 4.0, v * 4.0);
                    let expected = (base + 0.4 * 0.9 * 0.9).min(1.0);
                    let h = c.surface_height(u, v);
                    assert!(
                        (h - expected).abs() < 1e-9,
                        "seed {seed} ({u}, {v}): {h} != {expected}"
                    );
                    if expected < 1.0 {
                        unclamped += 1;
                    }
                }
            }
        }
        assert!(unclamped > 0, "every boosted sample saturated");
    }

    #[test]
    fn test_archipelagos_raise_equatorial_lowlands() {
        let mut raised = 0;
        for seed in [5.0, 61.0] {
            let c = classifier(seed);
            for i in 0..256 {
                let u = i as f64 / 256.0;
                for j in 0..=8 {
                    let v = 0.3 + 0.4 * j as f64 / 8.0;
                    let base = c.continents.sample(u * 4.0, v * 4.0);
                    let islands = c.archipelago.sample(u * 15.0, v * 15.0);
                    let h = c.surface_height(u, v);
                    if islands > 0.6 && base < islands * 0.9 {
                        assert_eq!(h, islands * 0.9, "seed {seed} ({u}, {v})");
                        raised += 1;
                    } else {
                        assert_eq!(h, base, "seed {seed} ({u}, {v})");
                    }
                }
            }
        }
        assert!(raised > 0, "no island texels found in the equatorial belt");
    }

    #[test]
    fn test_archipelagos_stay_out_of_high_latitudes() {
        // At v = 0.15 and 0.85 the belt mask is 0.51, below the 0.6 cutoff.
        let c = classifier(5.0);
        for i in 0..512 {
            let u = i as f64 / 512.0;
            for v in [0.15, 0.85] {
                let base = c.continents.sample(u * 4.0, v * 4.0);
                assert_eq!(c.surface_height(u, v), base.clamp(0.0, 1.0), "({u}, {v})");
            }
        }
    }

    /// Height that maps to `altitude` under the default water level.
    fn height_at_altitude(altitude: f64) -> f64 {
        0.6 + 0.4 * altitude
    }

    /// First grid point in the temperate band matching `pred`.
    fn find_texel(pred: impl Fn(f64, f64) -> bool) -> Option<(f64, f64)> {
        (0..400)
            .flat_map(|i| (0..200).map(move |j| (i as f64 / 400.0, 0.1 + 0.8 * j as f64 / 200.0)))
            .find(|&(u, v)| pred(u, v))
    }

    #[test]
    fn test_crystal_plains_glow_in_forest() {
        let c = classifier(14.0);
        let (u, v) = find_texel(|u, v| {
            c.vegetation.sample_point(u * 5.0, v * 5.0) > 0.5
                && c.crystals.sample_point(u * 50.0, v * 50.0) > 0.85
        })
        .expect("crystal forest texel");
        let record = c.classify_with_height(u, v, height_at_altitude(0.2));
        assert_eq!(record.biome, Biome::Forest);
        assert_eq!(record.color, palette::FOREST);
        assert_eq!(record.emissive, palette::CRYSTAL_GLOW);
    }

    #[test]
    fn test_bioluminescent_jungle_glows() {
        let c = classifier(14.0);
        let (u, v) = find_texel(|u, v| {
            c.vegetation.sample_point(u * 5.0, v * 5.0) <= 0.5
                && c.bioluminescence.sample_point(u * 60.0, v * 60.0) > 0.65
        })
        .expect("glowing jungle texel");
        let record = c.classify_with_height(u, v, height_at_altitude(0.2));
        assert_eq!(record.biome, Biome::Jungle);
        assert_eq!(record.color, palette::JUNGLE);
        assert_eq!(record.emissive, palette::BIOLUMINESCENT_GLOW);
    }

    #[test]
    fn test_lava_vents_only_on_high_mountains() {
        let c = classifier(14.0);
        let (u, v) = find_texel(|u, v| c.lava.sample_point(u * 40.0, v * 40.0) > 0.7)
            .expect("lava vent texel");

        let volcanic = c.classify_with_height(u, v, height_at_altitude(0.7));
        assert_eq!(volcanic.biome, Biome::VolcanicRock);
        assert_eq!(volcanic.color, [20, 5, 5]);
        assert_eq!(volcanic.emissive, palette::LAVA_GLOW);

        for altitude in [0.46, 0.5, 0.59] {
            let record = c.classify_with_height(u, v, height_at_altitude(altitude));
            assert_eq!(record.biome, Biome::Mountain, "altitude {altitude}");
            assert_eq!(record.emissive, palette::NO_GLOW, "altitude {altitude}");
        }

        // Across the band, volcanic rock never appears at or below 0.6.
        for i in 0..100 {
            for j in 0..50 {
                let (u, v) = (i as f64 / 100.0, 0.1 + 0.8 * j as f64 / 50.0);
                let record = c.classify_with_height(u, v, height_at_altitude(0.55));
                assert_ne!(record.biome, Biome::VolcanicRock, "({u}, {v})");
            }
        }
    }

    #[test]
    fn test_cloud_alpha_matches_threshold_rule() {
        let c = classifier(2.0);
        let mut covered = 0;
        for i in 0..256 {
            for j in 0..128 {
                let (u, v) = (i as f64 / 256.0, j as f64 / 128.0);
                let density = c.clouds.sample(u * 8.0 + 2.0, v * 8.0);
                let alpha = c.cloud_alpha(u, v);
                if density <= 0.55 {
                    assert_eq!(alpha, 0);
                } else {
                    covered += 1;
                    let expected = ((density - 0.55) * 2.5 * 255.0).round().min(255.0) as u8;
                    assert_eq!(alpha, expected);
                }
            }
        }
        assert!(covered > 0, "Some cloud cover expected");
    }

    #[test]
    fn test_classification_is_deterministic() {
        let a = classifier(64.0);
        let b = classifier(64.0);
        for i in 0..100 {
            let (u, v) = (i as f64 * 0.0097, 0.13 + i as f64 * 0.007);
            assert_eq!(a.classify(u, v), b.classify(u, v));
        }
    }

    #[test]
    fn test_biome_names_unique() {
        let mut names: Vec<_> = Biome::ALL.iter().map(Biome::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Biome::ALL.len());
        for (i, biome) in Biome::ALL.iter().enumerate() {
            assert_eq!(biome.index(), i);
        }
    }
}
