use serde::Deserialize;
use std::path::PathBuf;

use crate::screening::DEFAULT_MESSAGE;

fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}
fn default_strict() -> bool {
    false
}
fn default_verbose() -> bool {
    false
}

/// File-based configuration for the service-area boundary
///
/// The boundary can be given inline as `[lat, lng]` pairs or as a path
/// to a GeoJSON file; inline points win when both are set.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub boundary: Option<Vec<[f64; 2]>>,
    #[serde(default)]
    pub geojson: Option<PathBuf>,
    #[serde(default = "default_message")]
    pub message: String,
    #[serde(default = "default_strict")]
    pub strict: bool,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Inline boundary points as (lat, lng) pairs, if configured
    pub fn boundary_points(&self) -> Option<Vec<(f64, f64)>> {
        self.boundary
            .as_ref()
            .map(|points| points.iter().map(|p| (p[0], p[1])).collect())
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("cityfence.toml"));
    paths.push(PathBuf::from(".cityfence.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("cityfence").join("config.toml"));
        paths.push(config_dir.join("cityfence.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".cityfence.toml"));
        paths.push(home.join(".config").join("cityfence").join("config.toml"));
    }

    paths
}
