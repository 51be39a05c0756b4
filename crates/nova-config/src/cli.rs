//! Command-line argument parsing for Nova Terra.

use std::path::PathBuf;

use clap::Parser;

use crate::NovaConfig;

/// Nova Terra command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "nova-terra", about = "Procedural planet textures and binary-star lighting")]
pub struct CliArgs {
    /// Noise seed (random when neither this nor the config sets one).
    #[arg(long)]
    pub seed: Option<f64>,

    /// Height below which texels become ocean.
    #[arg(long)]
    pub water_level: Option<f64>,

    /// Number of fBm octaves.
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Directory receiving the generated PNG channels.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Skip writing PNG files.
    #[arg(long)]
    pub no_export: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seconds of orbital timeline to sample and log after generation.
    #[arg(long, default_value_t = 60.0)]
    pub timeline_seconds: f64,
}

impl NovaConfig {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.generation.seed = Some(seed);
        }
        if let Some(level) = args.water_level {
            self.generation.water_level = level;
        }
        if let Some(octaves) = args.octaves {
            self.generation.octaves = octaves;
        }
        if let Some(ref dir) = args.output {
            self.output.directory = dir.clone();
        }
        if args.no_export {
            self.output.export_png = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
