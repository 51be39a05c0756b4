//! Binary-star system: time-driven star positions, background and surface
//! rotation, and the light descriptors for both stars.

mod orbital;
mod star;

pub use orbital::{
    AXIAL_TILT_DEGREES, BackgroundRotation, OrbitalSimulator, OrbitalState, SurfaceRotation,
};
pub use star::{AmbientLight, RimLight, StarLight, StarSystemLights, StarType, hex_to_rgb};
