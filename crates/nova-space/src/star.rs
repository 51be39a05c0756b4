//! Light descriptors for the binary-star system.

use glam::{DVec3, Vec3};

/// Spectral class of the two stars in the system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarType {
    /// G-type: yellow-white, Sol-like. The primary.
    G,
    /// K-type: orange, cooler. The secondary.
    K,
}

impl StarType {
    /// Display color as packed `0xRRGGBB`.
    pub fn hex_color(&self) -> u32 {
        match self {
            StarType::G => 0xfff8e7,
            StarType::K => 0xff8844,
        }
    }

    /// Light intensity used for this class.
    pub fn intensity(&self) -> f32 {
        match self {
            StarType::G => 3.5,
            StarType::K => 1.0,
        }
    }

    /// Approximate effective temperature in Kelvin.
    pub fn temperature_k(&self) -> f32 {
        match self {
            StarType::G => 5600.0,
            StarType::K => 4450.0,
        }
    }
}

/// Unpack `0xRRGGBB` into an RGB vector in `[0, 1]`.
pub fn hex_to_rgb(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    Vec3::new(r, g, b)
}

/// A point light positioned at a star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarLight {
    pub star_type: StarType,
    pub color: Vec3,
    pub intensity: f32,
    pub casts_shadows: bool,
    pub position: DVec3,
}

impl StarLight {
    /// Light for a star of the given class at `position`.
    pub fn new(star_type: StarType, position: DVec3) -> Self {
        Self {
            star_type,
            color: hex_to_rgb(star_type.hex_color()),
            intensity: star_type.intensity(),
            casts_shadows: star_type == StarType::G,
            position,
        }
    }

    /// Pre-multiplied color, as consumed by a shader.
    pub fn radiance(&self) -> Vec3 {
        self.color * self.intensity
    }
}

/// Faint deep-space fill light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: hex_to_rgb(0x1a103c),
            intensity: 0.02,
        }
    }
}

/// Overhead spotlight washing the planet's upper limb, standing in for
/// atmospheric scattering seen from space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RimLight {
    pub position: DVec3,
    pub color: Vec3,
    pub intensity: f32,
    /// Cone half-angle in radians.
    pub angle: f32,
    /// Edge softness in `[0, 1]`; 1 fades across the whole cone.
    pub penumbra: f32,
    /// Range beyond which the light has no effect.
    pub distance: f32,
}

impl Default for RimLight {
    fn default() -> Self {
        Self {
            position: DVec3::new(0.0, 15.0, 0.0),
            color: hex_to_rgb(0x4f46e5),
            intensity: 0.2,
            angle: 1.5,
            penumbra: 1.0,
            distance: 30.0,
        }
    }
}

/// Every light in the scene for one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarSystemLights {
    pub primary: StarLight,
    pub secondary: StarLight,
    pub ambient: AmbientLight,
    pub rim: RimLight,
}

impl StarSystemLights {
    /// Lights placed at the star positions of an orbital snapshot.
    pub fn at(state: &crate::OrbitalState) -> Self {
        Self {
            primary: StarLight::new(StarType::G, state.primary_star_position),
            secondary: StarLight::new(StarType::K, state.secondary_star_position),
            ambient: AmbientLight::default(),
            rim: RimLight::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OrbitalSimulator;

    #[test]
    fn test_hex_unpack() {
        assert_eq!(hex_to_rgb(0xffffff), Vec3::ONE);
        assert_eq!(hex_to_rgb(0x000000), Vec3::ZERO);
        let orange = hex_to_rgb(0xff8844);
        assert_eq!(orange.x, 1.0);
        assert!((orange.y - 136.0 / 255.0).abs() < 1e-6);
        assert!((orange.z - 68.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_primary_and_secondary_lights() {
        let state = OrbitalSimulator::default().state(0.0);
        let lights = StarSystemLights::at(&state);

        assert_eq!(lights.primary.intensity, 3.5);
        assert!(lights.primary.casts_shadows);
        assert_eq!(lights.primary.position, state.primary_star_position);
        assert_eq!(lights.primary.color, hex_to_rgb(0xfff8e7));

        assert_eq!(lights.secondary.intensity, 1.0);
        assert!(!lights.secondary.casts_shadows);
        assert_eq!(lights.secondary.position, state.secondary_star_position);

        assert_eq!(lights.ambient.intensity, 0.02);
        assert_eq!(lights.ambient.color, hex_to_rgb(0x1a103c));
    }

    #[test]
    fn test_rim_light_is_fixed_overhead() {
        let early = StarSystemLights::at(&OrbitalSimulator::default().state(0.0));
        let late = StarSystemLights::at(&OrbitalSimulator::default().state(37.0));
        assert_eq!(early.rim, late.rim);

        let rim = early.rim;
        assert_eq!(rim.position, DVec3::new(0.0, 15.0, 0.0));
        assert_eq!(rim.color, hex_to_rgb(0x4f46e5));
        assert_eq!(rim.intensity, 0.2);
        assert_eq!(rim.angle, 1.5);
        assert_eq!(rim.penumbra, 1.0);
        assert_eq!(rim.distance, 30.0);
    }

    #[test]
    fn test_primary_hotter_than_secondary() {
        assert!(StarType::G.temperature_k() > StarType::K.temperature_k());
        let primary = StarLight::new(StarType::G, DVec3::ZERO);
        assert!((primary.radiance().x - 3.5).abs() < 1e-6);
    }
}
