//! PNG export of a [`TextureSet`], one file per channel.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::synth::TextureSet;

/// Errors that can occur during PNG export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A channel failed to encode or write.
    #[error("failed to write {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Write every channel to `<dir>/<channel>.png`, returning the written paths.
pub fn export_png(textures: &TextureSet, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(5);
    for (channel, image) in textures.channels() {
        let path = dir.join(format!("{}.png", channel.name()));
        image.save(&path).map_err(|source| ExportError::Image {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }

    info!(dir = %dir.display(), files = written.len(), "Exported texture channels");
    Ok(written)
}
