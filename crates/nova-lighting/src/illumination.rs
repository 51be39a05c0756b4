//! Day/night emissive modulation.
//!
//! City lights, lava and bioluminescence should read as faint on the lit
//! hemisphere and bright on the night side. Each frame the primary star's
//! world position is moved into view space once and frozen into a
//! [`FrameIllumination`]; every fragment of that frame reads the same copy.
//!
//! The terminator is a soft band: the night mask ramps from 0 at
//! `dot(N, L) = day_threshold` to 1 at `dot(N, L) = night_threshold`.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use nova_config::{ConfigError, IlluminationConfig};

/// Clamped cubic Hermite step between `edge0` and `edge1`.
///
/// `edge0` may be greater than `edge1`, which inverts the ramp.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Night mask for a given `dot(N, L)` using the thresholds in `config`.
///
/// 0 on the fully lit side, 1 on the fully dark side.
pub fn night_mask(dot_nl: f32, config: &IlluminationConfig) -> f32 {
    smoothstep(config.day_threshold, config.night_threshold, dot_nl)
}

/// Adjusts base emissive color given the fragment's night mask.
///
/// Implemented by [`NightBoost`] and by any `Fn(Vec3, f32) -> Vec3` closure.
pub trait EmissivePostProcess: Send + Sync {
    fn apply(&self, base_emissive: Vec3, night_mask: f32) -> Vec3;
}

impl<F> EmissivePostProcess for F
where
    F: Fn(Vec3, f32) -> Vec3 + Send + Sync,
{
    fn apply(&self, base_emissive: Vec3, night_mask: f32) -> Vec3 {
        self(base_emissive, night_mask)
    }
}

/// Default post-process: scale emissive by `day_floor + night_boost * mask`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NightBoost {
    pub day_floor: f32,
    pub night_boost: f32,
}

impl NightBoost {
    pub fn multiplier(&self, night_mask: f32) -> f32 {
        self.day_floor + self.night_boost * night_mask
    }
}

impl Default for NightBoost {
    fn default() -> Self {
        Self::from(&IlluminationConfig::default())
    }
}

impl From<&IlluminationConfig> for NightBoost {
    fn from(config: &IlluminationConfig) -> Self {
        Self {
            day_floor: config.day_floor,
            night_boost: config.night_boost,
        }
    }
}

impl EmissivePostProcess for NightBoost {
    fn apply(&self, base_emissive: Vec3, night_mask: f32) -> Vec3 {
        base_emissive * self.multiplier(night_mask)
    }
}

/// Lighting terms for one fragment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IlluminationResult {
    /// `dot(N, L)` in view space.
    pub dot_nl: f32,
    /// 0 = day, 1 = night.
    pub night_mask: f32,
    /// `day_floor + night_boost * night_mask` from the frame's config.
    ///
    /// Always the [`NightBoost`] rule, whatever post-process the model was
    /// given; use [`IlluminationModel::shade_emissive`] for the final color.
    pub emissive_multiplier: f32,
}

/// Frozen per-frame illumination inputs.
///
/// Built by [`IlluminationModel::begin_frame`]. Holds no references, so it can
/// be copied into parallel fragment workers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameIllumination {
    star_view_position: Vec3,
    config: IlluminationConfig,
}

impl FrameIllumination {
    /// Primary star position in view space.
    pub fn star_view_position(&self) -> Vec3 {
        self.star_view_position
    }

    /// Unit vector from `frag_pos` toward the star, or zero if they coincide.
    pub fn light_direction(&self, frag_pos: Vec3) -> Vec3 {
        (self.star_view_position - frag_pos).normalize_or_zero()
    }

    /// Evaluate the terminator for a view-space position and normal.
    pub fn evaluate(&self, frag_pos: Vec3, normal: Vec3) -> IlluminationResult {
        let dot_nl = normal.normalize_or_zero().dot(self.light_direction(frag_pos));
        let mask = night_mask(dot_nl, &self.config);
        IlluminationResult {
            dot_nl,
            night_mask: mask,
            emissive_multiplier: NightBoost::from(&self.config).multiplier(mask),
        }
    }

    /// GPU layout of this snapshot.
    pub fn to_uniform(&self) -> IlluminationUniform {
        let p = self.star_view_position;
        IlluminationUniform {
            star_view_position: [p.x, p.y, p.z, 0.0],
            thresholds: [
                self.config.day_threshold,
                self.config.night_threshold,
                self.config.day_floor,
                self.config.night_boost,
            ],
        }
    }
}

/// Uniform block consumed by the surface fragment shader.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct IlluminationUniform {
    /// xyz = primary star in view space, w = padding.
    pub star_view_position: [f32; 4],
    /// day threshold, night threshold, day floor, night boost.
    pub thresholds: [f32; 4],
}

/// Illumination state threaded into the per-frame update.
///
/// Generic over the emissive post-process; [`NightBoost`] is the default.
pub struct IlluminationModel<P = NightBoost> {
    config: IlluminationConfig,
    post_process: P,
}

impl IlluminationModel<NightBoost> {
    /// Create a model with the default night-boost post-process.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if thresholds are out of order or
    /// multipliers are negative.
    pub fn new(config: IlluminationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let post_process = NightBoost::from(&config);
        Ok(Self {
            config,
            post_process,
        })
    }
}

impl<P: EmissivePostProcess> IlluminationModel<P> {
    /// Replace the emissive post-process.
    pub fn with_post_process<Q: EmissivePostProcess>(self, post_process: Q) -> IlluminationModel<Q> {
        IlluminationModel {
            config: self.config,
            post_process,
        }
    }

    pub fn config(&self) -> &IlluminationConfig {
        &self.config
    }

    /// Transform the primary star into view space and freeze it for the frame.
    pub fn begin_frame(&self, star_world: Vec3, view: Mat4) -> FrameIllumination {
        FrameIllumination {
            star_view_position: view.transform_point3(star_world),
            config: self.config,
        }
    }

    /// Final emissive color for one fragment.
    pub fn shade_emissive(
        &self,
        frame: &FrameIllumination,
        base_emissive: Vec3,
        frag_pos: Vec3,
        normal: Vec3,
    ) -> Vec3 {
        let result = frame.evaluate(frag_pos, normal);
        self.post_process.apply(base_emissive, result.night_mask)
    }
}
