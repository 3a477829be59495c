//! Pilot settings
//!
//! Loaded from a JSON file named by `PADDLE_PILOT_SETTINGS`. Missing fields
//! take their defaults; a missing or broken file falls back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::Geometry;

/// Pilot settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Serve RNG seed (None = seed from the OS)
    pub seed: Option<u64>,
    /// Play-field geometry and controller thresholds
    pub geometry: Geometry,
    /// Log every frame's decision at info level instead of debug
    pub trace_frames: bool,
}

impl Settings {
    /// Environment variable holding the settings file path
    pub const ENV_VAR: &'static str = "PADDLE_PILOT_SETTINGS";

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Cannot read settings {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Load from the file named by `ENV_VAR`, or use defaults
    pub fn from_env() -> Self {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_defaults_match_field_constants() {
        let settings = Settings::default();
        assert_eq!(settings.seed, None);
        assert!(!settings.trace_frames);
        assert_eq!(settings.geometry.paddle_line_y, PADDLE_LINE_Y);
        assert_eq!(settings.geometry.dead_zone, DEAD_ZONE);
    }

    #[test]
    fn test_partial_file() {
        let settings: Settings =
            serde_json::from_str(r#"{"seed":7,"geometry":{"paddle_half_width":25}}"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.geometry.paddle_half_width, 25);
        assert_eq!(settings.geometry.field_right_x, FIELD_RIGHT_X);
    }

    #[test]
    fn test_load_falls_back_on_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert_eq!(Settings::load(&missing), Settings::default());

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert_eq!(Settings::load(&broken), Settings::default());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"trace_frames":true,"seed":3}"#).unwrap();
        let settings = Settings::load(&path);
        assert!(settings.trace_frames);
        assert_eq!(settings.seed, Some(3));
    }
}
