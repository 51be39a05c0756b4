use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glam::{Mat4, Vec3};
use nova_config::{CliArgs, NovaConfig};
use nova_lighting::{AtmosphereRim, IlluminationModel};
use nova_space::{AXIAL_TILT_DEGREES, OrbitalSimulator, StarSystemLights};
use nova_terrain::{AsyncTextureSynthesis, TextureSynthesizer, export_png};
use tracing::{error, info, warn};

/// Planet radius used when sampling the timeline.
const PLANET_RADIUS: f32 = 5.0;
/// Camera distance from the planet center.
const CAMERA_DISTANCE: f32 = 30.0;
/// Interval between logged timeline samples, in seconds.
const TIMELINE_STEP: f64 = 5.0;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args
        .config
        .clone()
        .or_else(nova_config::default_config_dir)
        .unwrap_or_else(|| PathBuf::from(".nova-terra"));

    // Load or create config, then apply CLI overrides
    let mut config = NovaConfig::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        NovaConfig::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    nova_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    info!(config_dir = %config_dir.display(), "Nova Terra starting");

    if let Err(e) = generate_textures(&config) {
        error!("Texture generation failed: {e}");
        return ExitCode::FAILURE;
    }

    match run_timeline(&config, args.timeline_seconds) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Timeline failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn generate_textures(config: &NovaConfig) -> Result<(), Box<dyn std::error::Error>> {
    let synthesizer = TextureSynthesizer::from_config(&config.generation)?;
    let seed = synthesizer.seed();
    let done = AsyncTextureSynthesis::spawn(synthesizer)?.wait()?;

    let stats = done.textures.stats();
    info!(
        seed,
        generation_ms = done.generation_time_us / 1000,
        ocean_fraction = stats.ocean_fraction(),
        "Texture set ready"
    );

    if !config.output.export_png {
        info!("PNG export disabled");
        return Ok(());
    }

    let written = export_png(&done.textures, &config.output.directory)?;
    for path in &written {
        info!(path = %path.display(), "Wrote channel");
    }
    Ok(())
}

/// Log star positions and the day/night state of the surface point facing
/// the camera at regular steps.
fn run_timeline(config: &NovaConfig, seconds: f64) -> Result<(), Box<dyn std::error::Error>> {
    if !seconds.is_finite() || seconds < 0.0 {
        warn!(seconds, "Ignoring invalid timeline length");
        return Ok(());
    }

    let simulator = OrbitalSimulator::new(config.orbit.clone())?;
    let illumination = IlluminationModel::new(config.illumination)?;
    let rim = AtmosphereRim::default();

    let eye = Vec3::new(0.0, 0.0, CAMERA_DISTANCE);
    let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
    let near_point = view.transform_point3(Vec3::new(0.0, 0.0, PLANET_RADIUS));
    let near_normal = view.transform_vector3(Vec3::Z);

    info!(
        axial_tilt = AXIAL_TILT_DEGREES,
        limb_glow = ?rim.glow(Vec3::X, Vec3::Z),
        "Sampling orbital timeline"
    );

    let steps = (seconds / TIMELINE_STEP).floor() as u64;
    for step in 0..=steps {
        let t = step as f64 * TIMELINE_STEP;
        let state = simulator.state(t);
        let lights = StarSystemLights::at(&state);

        let frame = illumination.begin_frame(state.primary_star_position.as_vec3(), view);
        let facing = frame.evaluate(near_point, near_normal);

        info!(
            t,
            primary = %lights.primary.position,
            secondary = %lights.secondary.position,
            background_yaw = state.background_rotation.yaw,
            planet_yaw = state.surface_rotation.planet_yaw,
            night_mask = facing.night_mask,
            emissive_multiplier = facing.emissive_multiplier,
            "Timeline sample"
        );
    }

    Ok(())
}
