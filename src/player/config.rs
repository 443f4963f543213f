//! Loader for the movement tuning RON file at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::MovementTuning;

const TUNING_PATH: &str = "assets/data/movement.ron";

/// Error type for tuning load failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn load_tuning(path: &Path) -> Result<MovementTuning, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| TuningLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Replace the default tuning with the data file if it loads. A missing or
/// malformed file is a startup warning, never a failed tick.
pub(crate) fn load_movement_tuning(mut tuning: ResMut<MovementTuning>) {
    match load_tuning(Path::new(TUNING_PATH)) {
        Ok(loaded) => {
            info!("Loaded movement tuning from {}", TUNING_PATH);
            *tuning = loaded;
        }
        Err(err) => {
            warn!("{}; using built-in movement tuning", err);
        }
    }
}
