//! Configuration structs with sensible defaults, validation, and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level Nova Terra configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NovaConfig {
    /// Surface texture generation settings.
    pub generation: GenerationConfig,
    /// Binary-star orbit settings.
    pub orbit: OrbitConfig,
    /// Day/night terminator and emissive boost settings.
    pub illumination: IlluminationConfig,
    /// Where generated textures are written.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Procedural surface generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Noise seed. `None` draws a random seed once per session.
    pub seed: Option<f64>,
    /// Height below which a texel is ocean.
    pub water_level: f64,
    /// Number of fBm octaves.
    pub octaves: u32,
    /// Land altitude below which a texel is beach.
    pub beach_altitude: f64,
    /// Land altitude below which a texel is forest or jungle.
    pub vegetation_altitude: f64,
    /// Land altitude below which a texel is mountain; snow above.
    pub mountain_altitude: f64,
    /// Normalized latitude (`v`) above which the north ice cap is forced.
    pub polar_north: f64,
    /// Normalized latitude (`v`) below which the south ice cap is forced.
    pub polar_south: f64,
}

/// Binary-star orbit settings. Times are in seconds, distances in scene units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitConfig {
    /// Radius of the primary star's circular orbit around the planet.
    pub primary_radius: f64,
    /// Seconds per primary revolution (one planetary year).
    pub primary_period: f64,
    /// Fixed height of the primary's orbital plane.
    pub primary_height: f64,
    /// Radius of the secondary star's orbit around the primary.
    pub secondary_radius: f64,
    /// Seconds per secondary revolution around the primary.
    pub secondary_period: f64,
    /// Centre height of the secondary's vertical oscillation.
    pub secondary_base_height: f64,
    /// Amplitude of the secondary's vertical oscillation.
    pub secondary_bob_amplitude: f64,
    /// Angular rate (radians per second) of the secondary's vertical oscillation.
    pub secondary_bob_rate: f64,
    /// Background starfield yaw rate (radians per second).
    pub background_yaw_rate: f64,
    /// Background starfield roll rate (radians per second).
    pub background_roll_rate: f64,
    /// Planet surface spin rate (radians per second).
    pub planet_spin_rate: f64,
    /// Cloud layer spin rate (radians per second).
    pub cloud_spin_rate: f64,
}

/// Terminator thresholds and emissive boost constants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IlluminationConfig {
    /// `dot(N, L)` at and above which the night mask is 0.
    pub day_threshold: f32,
    /// `dot(N, L)` at and below which the night mask is 1.
    pub night_threshold: f32,
    /// Emissive multiplier on the fully lit side.
    pub day_floor: f32,
    /// Extra emissive multiplier added on the fully dark side.
    pub night_boost: f32,
}

/// Texture export settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving one PNG per texture channel.
    pub directory: PathBuf,
    /// Write PNGs after generation.
    pub export_png: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            water_level: 0.60,
            octaves: 6,
            beach_altitude: 0.05,
            vegetation_altitude: 0.45,
            mountain_altitude: 0.75,
            polar_north: 0.08,
            polar_south: 0.92,
        }
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            primary_radius: 12.0,
            primary_period: 60.0,
            primary_height: 5.0,
            secondary_radius: 4.0,
            secondary_period: 20.0,
            secondary_base_height: 2.0,
            secondary_bob_amplitude: 2.0,
            secondary_bob_rate: 0.5,
            background_yaw_rate: 0.005,
            background_roll_rate: 0.002,
            planet_spin_rate: 0.03,
            cloud_spin_rate: 0.045,
        }
    }
}

impl Default for IlluminationConfig {
    fn default() -> Self {
        Self {
            day_threshold: 0.15,
            night_threshold: -0.25,
            day_floor: 0.5,
            night_boost: 4.5,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("textures"),
            export_png: true,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Validation ---

fn ensure(condition: bool, field: &'static str, reason: impl Into<String>) -> Result<(), ConfigError> {
    if condition {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, reason))
    }
}

fn ensure_positive(value: f64, field: &'static str) -> Result<(), ConfigError> {
    ensure(
        value.is_finite() && value > 0.0,
        field,
        format!("must be a finite value greater than 0, got {value}"),
    )
}

fn ensure_finite(value: f64, field: &'static str) -> Result<(), ConfigError> {
    ensure(value.is_finite(), field, format!("must be finite, got {value}"))
}

impl GenerationConfig {
    /// Check ranges and threshold ordering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(seed) = self.seed {
            ensure_finite(seed, "generation.seed")?;
        }
        ensure(
            self.water_level > 0.0 && self.water_level < 1.0,
            "generation.water_level",
            format!("must lie strictly between 0 and 1, got {}", self.water_level),
        )?;
        ensure(
            (1..=16).contains(&self.octaves),
            "generation.octaves",
            format!("must be between 1 and 16, got {}", self.octaves),
        )?;
        ensure(
            self.beach_altitude > 0.0 && self.beach_altitude < 1.0,
            "generation.beach_altitude",
            format!("must lie strictly between 0 and 1, got {}", self.beach_altitude),
        )?;
        ensure(
            self.vegetation_altitude > self.beach_altitude && self.vegetation_altitude < 1.0,
            "generation.vegetation_altitude",
            format!(
                "must lie between beach_altitude ({}) and 1, got {}",
                self.beach_altitude, self.vegetation_altitude
            ),
        )?;
        ensure(
            self.mountain_altitude > self.vegetation_altitude && self.mountain_altitude < 1.0,
            "generation.mountain_altitude",
            format!(
                "must lie between vegetation_altitude ({}) and 1, got {}",
                self.vegetation_altitude, self.mountain_altitude
            ),
        )?;
        ensure(
            (0.0..=1.0).contains(&self.polar_north),
            "generation.polar_north",
            format!("must lie within [0, 1], got {}", self.polar_north),
        )?;
        ensure(
            (0.0..=1.0).contains(&self.polar_south),
            "generation.polar_south",
            format!("must lie within [0, 1], got {}", self.polar_south),
        )?;
        ensure(
            self.polar_north < self.polar_south,
            "generation.polar_south",
            format!(
                "must be greater than polar_north ({}), got {}",
                self.polar_north, self.polar_south
            ),
        )
    }
}

impl OrbitConfig {
    /// Check that radii, periods, and rates are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive(self.primary_radius, "orbit.primary_radius")?;
        ensure_positive(self.primary_period, "orbit.primary_period")?;
        ensure_positive(self.secondary_radius, "orbit.secondary_radius")?;
        ensure_positive(self.secondary_period, "orbit.secondary_period")?;
        ensure_finite(self.primary_height, "orbit.primary_height")?;
        ensure_finite(self.secondary_base_height, "orbit.secondary_base_height")?;
        ensure_finite(self.secondary_bob_amplitude, "orbit.secondary_bob_amplitude")?;
        ensure_finite(self.secondary_bob_rate, "orbit.secondary_bob_rate")?;
        ensure_finite(self.background_yaw_rate, "orbit.background_yaw_rate")?;
        ensure_finite(self.background_roll_rate, "orbit.background_roll_rate")?;
        ensure_finite(self.planet_spin_rate, "orbit.planet_spin_rate")?;
        ensure_finite(self.cloud_spin_rate, "orbit.cloud_spin_rate")
    }
}

impl IlluminationConfig {
    /// Check threshold ordering and multiplier signs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure(
            self.day_threshold.is_finite() && (-1.0..=1.0).contains(&self.day_threshold),
            "illumination.day_threshold",
            format!("must lie within [-1, 1], got {}", self.day_threshold),
        )?;
        ensure(
            self.night_threshold.is_finite() && (-1.0..=1.0).contains(&self.night_threshold),
            "illumination.night_threshold",
            format!("must lie within [-1, 1], got {}", self.night_threshold),
        )?;
        ensure(
            self.day_threshold > self.night_threshold,
            "illumination.night_threshold",
            format!(
                "must be below day_threshold ({}), got {}",
                self.day_threshold, self.night_threshold
            ),
        )?;
        ensure(
            self.day_floor.is_finite() && self.day_floor >= 0.0,
            "illumination.day_floor",
            format!("must be finite and non-negative, got {}", self.day_floor),
        )?;
        ensure(
            self.night_boost.is_finite() && self.night_boost >= 0.0,
            "illumination.night_boost",
            format!("must be finite and non-negative, got {}", self.night_boost),
        )
    }
}

impl NovaConfig {
    /// Validate every section, returning the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generation.validate()?;
        self.orbit.validate()?;
        self.illumination.validate()
    }
}

// --- Load / Save / Reload ---

/// Platform config directory for Nova Terra, e.g. `~/.config/nova-terra`.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("nova-terra"))
}

impl NovaConfig {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: NovaConfig = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = NovaConfig::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: NovaConfig = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
