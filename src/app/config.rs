use crate::paths::*;

use std::fs::File;
use std::io::BufReader;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct FolioConfig {
    /// Skip entrance animations and render sections fully visible
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default = "default_film_grain")]
    pub film_grain: bool,
    #[serde(default = "default_projects_cycle_secs")]
    pub projects_cycle_secs: f32,
    #[serde(default = "default_certificates_cycle_secs")]
    pub certificates_cycle_secs: f32,
    #[serde(default = "default_zoom_factor")]
    pub zoom_factor: f32,
}

fn default_film_grain() -> bool {
    true
}

fn default_projects_cycle_secs() -> f32 {
    6.0
}

fn default_certificates_cycle_secs() -> f32 {
    5.0
}

fn default_zoom_factor() -> f32 {
    1.0
}

impl Default for FolioConfig {
    fn default() -> Self {
        FolioConfig {
            reduced_motion: false,
            film_grain: true,
            projects_cycle_secs: 6.0,
            certificates_cycle_secs: 5.0,
            zoom_factor: 1.0,
        }
    }
}

pub fn load_cfg() -> FolioConfig {
    let path = PATH_FOLIO.join("settings.json");

    if let Ok(file) = File::open(&path) {
        match serde_json::from_reader::<_, FolioConfig>(BufReader::new(file)) {
            Ok(mut config) => {
                // Hand-edited files sometimes carry nonsense durations
                if !(0.5..=120.0).contains(&config.projects_cycle_secs) {
                    config.projects_cycle_secs = default_projects_cycle_secs();
                }
                if !(0.5..=120.0).contains(&config.certificates_cycle_secs) {
                    config.certificates_cycle_secs = default_certificates_cycle_secs();
                }
                if !(0.5..=3.0).contains(&config.zoom_factor) {
                    config.zoom_factor = default_zoom_factor();
                }
                return config;
            }
            Err(err) => {
                log::warn!("unreadable settings at {}: {err}", path.display());
            }
        }
    }

    FolioConfig::default()
}

pub fn save_cfg(config: &FolioConfig) -> anyhow::Result<()> {
    let path = PATH_FOLIO.join("settings.json");
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_json_round_trip() {
        let config = FolioConfig {
            reduced_motion: true,
            film_grain: false,
            projects_cycle_secs: 8.0,
            certificates_cycle_secs: 4.0,
            zoom_factor: 1.25,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: FolioConfig = serde_json::from_str(&json).unwrap();
        assert!(back == config);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let back: FolioConfig = serde_json::from_str("{}").unwrap();
        assert!(back == FolioConfig::default());
    }
}
