use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clipper_core::ClipperSettings;
use engine_logging::{engine_info, engine_warn};

/// Reads settings from a RON file. A missing file means defaults; anything
/// else that goes wrong is an error.
pub(crate) fn load_settings(path: &Path) -> Result<ClipperSettings> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            engine_warn!("No settings at {:?}; using defaults", path);
            return Ok(ClipperSettings::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("reading settings from {}", path.display()))
        }
    };

    let settings = ron::from_str(&content)
        .with_context(|| format!("parsing settings from {}", path.display()))?;
    engine_info!("Loaded settings from {:?}", path);
    Ok(settings)
}
