//! Continuous-time orbits for the primary and secondary stars.
//!
//! Orbits are fixed-radius circles in the XZ plane. Every quantity is a pure
//! function of elapsed time, so `state(t)` can be sampled in any order and
//! repeated calls with the same `t` return identical values.

use std::f64::consts::TAU;

use glam::DVec3;
use nova_config::{ConfigError, OrbitConfig};

/// Planet axial tilt applied to the surface group.
pub const AXIAL_TILT_DEGREES: f64 = 23.5;

/// Angular rate of the cloud layer's wobble.
const CLOUD_PITCH_RATE: f64 = 0.05;
/// Peak cloud pitch offset in radians.
const CLOUD_PITCH_AMPLITUDE: f64 = 0.002;

/// Slow drift of the star-field backdrop, in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundRotation {
    pub yaw: f64,
    pub roll: f64,
}

/// Rotation of the planet surface and its cloud shell, in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceRotation {
    pub planet_yaw: f64,
    pub cloud_yaw: f64,
    pub cloud_pitch: f64,
}

/// Snapshot of the system at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalState {
    /// Seconds since the simulation started.
    pub elapsed_time: f64,
    /// World-space position of the primary (G-type) star.
    pub primary_star_position: DVec3,
    /// World-space position of the secondary (K-type) star.
    pub secondary_star_position: DVec3,
    pub background_rotation: BackgroundRotation,
    pub surface_rotation: SurfaceRotation,
}

/// Computes [`OrbitalState`] from elapsed time.
#[derive(Clone, Debug, Default)]
pub struct OrbitalSimulator {
    config: OrbitConfig,
}

impl OrbitalSimulator {
    /// Create a simulator from orbit settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for non-positive radii or periods, or
    /// non-finite heights and rates.
    pub fn new(config: OrbitConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The settings in use.
    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    /// Primary star position at time `t`.
    ///
    /// Circles the vertical axis at `primary_radius`, held at `primary_height`.
    /// At `t = 0` the star sits on the +Z axis.
    pub fn primary_position(&self, t: f64) -> DVec3 {
        let c = &self.config;
        let angle = t * TAU / c.primary_period;
        DVec3::new(
            angle.sin() * c.primary_radius,
            c.primary_height,
            angle.cos() * c.primary_radius,
        )
    }

    /// Secondary star position at time `t`.
    ///
    /// Circles the primary horizontally. Its height bobs around an absolute
    /// base rather than following the primary's height.
    pub fn secondary_position(&self, t: f64) -> DVec3 {
        let c = &self.config;
        let primary = self.primary_position(t);
        let angle = t * TAU / c.secondary_period;
        DVec3::new(
            primary.x + angle.sin() * c.secondary_radius,
            c.secondary_base_height + (t * c.secondary_bob_rate).sin() * c.secondary_bob_amplitude,
            primary.z + angle.cos() * c.secondary_radius,
        )
    }

    pub fn background_rotation(&self, t: f64) -> BackgroundRotation {
        BackgroundRotation {
            yaw: t * self.config.background_yaw_rate,
            roll: t * self.config.background_roll_rate,
        }
    }

    pub fn surface_rotation(&self, t: f64) -> SurfaceRotation {
        SurfaceRotation {
            planet_yaw: t * self.config.planet_spin_rate,
            cloud_yaw: t * self.config.cloud_spin_rate,
            cloud_pitch: (t * CLOUD_PITCH_RATE).sin() * CLOUD_PITCH_AMPLITUDE,
        }
    }

    /// Full system state at elapsed time `t` seconds.
    pub fn state(&self, t: f64) -> OrbitalState {
        OrbitalState {
            elapsed_time: t,
            primary_star_position: self.primary_position(t),
            secondary_star_position: self.secondary_position(t),
            background_rotation: self.background_rotation(t),
            surface_rotation: self.surface_rotation(t),
        }
    }
}
