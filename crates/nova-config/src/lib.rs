//! Configuration system for Nova Terra.
//!
//! Provides the generation, orbit, and illumination settings as RON-persisted
//! structs with sensible defaults. Supports CLI overrides via clap, hot-reload
//! detection, and fail-fast validation so malformed settings never reach the
//! texture synthesizer.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    DebugConfig, GenerationConfig, IlluminationConfig, NovaConfig, OrbitConfig, OutputConfig,
    default_config_dir,
};
pub use error::ConfigError;
