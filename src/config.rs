//! Runtime configuration: TOML file with environment overrides.
//!
//! Configuration is read from `presence.toml` when present (current directory
//! first, then the parent), with every field defaulted so the server also runs
//! without one. Environment variables override the file; pointing `DATA_CSV`
//! at a different file and restarting is the supported way to switch datasets.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
}

/// HTTP bind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Dataset and static page locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Path to the presence CSV export.
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
    /// Directory holding the static chart pages.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("data/test_data.csv")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.as_ref().to_path_buf(),
            source: e,
        })
    }

    /// Load configuration from the default locations.
    ///
    /// Searches for `presence.toml` in the current directory, then the parent.
    /// Falls back to built-in defaults when no file is found.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("presence.toml"),
            PathBuf::from("../presence.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Apply environment variable overrides.
    ///
    /// Recognized: `DATA_CSV`, `STATIC_DIR`, `HOST`, `PORT`.
    pub fn apply_env(&mut self) {
        if let Ok(path) = env::var("DATA_CSV") {
            self.data.csv_path = PathBuf::from(path);
        }
        if let Ok(dir) = env::var("STATIC_DIR") {
            self.data.static_dir = PathBuf::from(dir);
        }
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = env::var("PORT").ok().and_then(|s| s.parse().ok()) {
            self.server.port = port;
        }
    }

    /// Load configuration: default locations, then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_default_location()?;
        config.apply_env();
        Ok(config)
    }
}
