//! Atmosphere rim glow.
//!
//! A Fresnel-style halo: silent where the surface faces the viewer, rising
//! toward the limb, shifting from indigo to electric blue as it brightens.

use glam::Vec3;

/// Parameters of the rim glow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtmosphereRim {
    /// `dot(N, V)` above which no glow is produced.
    pub falloff_bias: f32,
    pub exponent: f32,
    /// Color of faint glow.
    pub inner_color: Vec3,
    /// Color approached as glow intensifies.
    pub outer_color: Vec3,
    /// How far toward `outer_color` full intensity moves.
    pub color_shift: f32,
    /// Final HDR multiplier.
    pub strength: f32,
}

impl Default for AtmosphereRim {
    fn default() -> Self {
        Self {
            falloff_bias: 0.75,
            exponent: 3.5,
            inner_color: Vec3::new(0.2, 0.1, 0.7),
            outer_color: Vec3::new(0.4, 0.7, 1.0),
            color_shift: 0.8,
            strength: 3.5,
        }
    }
}

impl AtmosphereRim {
    /// Rim intensity for a normal and the direction toward the viewer.
    pub fn intensity(&self, normal: Vec3, view_dir: Vec3) -> f32 {
        let facing = normal.normalize_or_zero().dot(view_dir.normalize_or_zero());
        (self.falloff_bias - facing).max(0.0).powf(self.exponent)
    }

    /// Emitted HDR color of the halo.
    pub fn glow(&self, normal: Vec3, view_dir: Vec3) -> Vec3 {
        let intensity = self.intensity(normal, view_dir);
        let color = self
            .inner_color
            .lerp(self.outer_color, intensity * self.color_shift);
        color * intensity * self.strength
    }
}
