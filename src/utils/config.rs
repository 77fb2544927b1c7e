use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{StationName, STATION_COUNT};

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "TOPSECRET_CONFIG";

/// Service-wide configuration, built once at startup and shared from there
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Default `tracing` filter, overridden by `RUST_LOG`
    pub log_filter: String,
    /// The three reference stations with their seed readings
    pub stations: Vec<StationConfig>,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind (e.g. `0.0.0.0`)
    pub host: String,
    /// TCP port
    pub port: u16,
}

/// Seed report for one reference station.
///
/// The station's coordinate is compiled in and cannot be configured; a file
/// that tries to set one is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StationConfig {
    pub name: StationName,
    /// Distance known at startup, if any
    #[serde(default)]
    pub distance: Option<f64>,
    /// Message fragment known at startup
    #[serde(default)]
    pub message: Vec<String>,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{path}': {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
}

/// Configuration validation result
#[derive(Debug)]
pub struct ValidationResult {
    /// Whether configuration is valid
    pub is_valid: bool,
    /// Validation errors
    pub errors: Vec<ConfigError>,
    /// Validation warnings
    pub warnings: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            log_filter: String::from("info"),
            stations: vec![
                seed_station(StationName::Kenobi, 150.0, &["", "este", "es", "un", "mensaje"]),
                seed_station(StationName::Skywalker, 238.0, &["Hola", "este", "", "un", ""]),
                seed_station(StationName::Sato, 176.0, &["", "", "es", "un", "mensaje"]),
            ],
        }
    }
}

fn seed_station(name: StationName, distance: f64, message: &[&str]) -> StationConfig {
    StationConfig {
        name,
        distance: Some(distance),
        message: message.iter().map(|word| word.to_string()).collect(),
    }
}

impl ServiceConfig {
    /// Load and validate a JSON configuration file. Missing fields take defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: ServiceConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Serialization {
                path: path.to_path_buf(),
                source,
            })?;

        // Validate before handing it out
        let validation = config.validate();
        if let Some(error) = validation.errors.into_iter().next() {
            return Err(error);
        }

        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_json()?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|source| ConfigError::Serialization {
            path: PathBuf::new(),
            source,
        })
    }

    /// Configuration for one station
    pub fn station(&self, name: StationName) -> Option<&StationConfig> {
        self.stations.iter().find(|station| station.name == name)
    }

    /// Validate station set, seed data and listener settings
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.server.host.trim().is_empty() {
            errors.push(invalid("server.host", &self.server.host, "Host must not be empty"));
        }
        if self.server.port == 0 {
            errors.push(invalid("server.port", "0", "Port must be non-zero"));
        }

        // Exactly three distinct stations
        if self.stations.len() != STATION_COUNT {
            errors.push(invalid(
                "stations",
                &self.stations.len().to_string(),
                "Exactly 3 stations are required",
            ));
        }
        let mut seen = HashSet::new();
        for station in &self.stations {
            if !seen.insert(station.name) {
                errors.push(invalid("stations.name", station.name.as_str(), "Duplicate station"));
            }
        }

        for station in &self.stations {
            let prefix = format!("stations.{}", station.name);

            if let Some(distance) = station.distance {
                if !distance.is_finite() || distance < 0.0 {
                    errors.push(invalid(
                        &format!("{prefix}.distance"),
                        &distance.to_string(),
                        "Distance must be finite and non-negative",
                    ));
                }
            }

            if station.distance.is_none() && !station.message.is_empty() {
                warnings.push(format!(
                    "Station {} has a seed message but no distance",
                    station.name
                ));
            }
        }

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

fn invalid(parameter: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidParameter {
        parameter: parameter.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
