//! Per-fragment lighting for the planet surface: day/night emissive
//! modulation driven by the primary star, plus the atmosphere rim glow.

mod atmosphere;
mod illumination;

pub use atmosphere::AtmosphereRim;
pub use illumination::{
    EmissivePostProcess, FrameIllumination, IlluminationModel, IlluminationResult,
    IlluminationUniform, NightBoost, night_mask, smoothstep,
};
