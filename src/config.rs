use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{GardenError, Result};

/// Service configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// JSON document holding the plant collection
    pub data_file: PathBuf,

    /// Interface to listen on
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Verbose (debug level) logging
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("plants.json"),
            host: "127.0.0.1".to_string(),
            port: 5000,
            debug: false,
        }
    }
}

impl Config {
    /// Resolves the configuration file to read, if any.
    ///
    /// An explicit path must exist. Without one, the platform config
    /// directory is consulted and skipped when nothing is there.
    pub fn source(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        match explicit {
            Some(path) if !path.exists() => Err(GardenError::ConfigError {
                message: format!("config file not found: {}", path.display()),
            }),
            Some(path) => Ok(Some(path.to_path_buf())),
            None => Ok(Self::default_path().filter(|path| path.exists())),
        }
    }

    /// Reads the config from `source`, or the defaults when there is none.
    ///
    /// Nothing is logged here; the logger is configured from the result.
    pub fn load_from(source: Option<&Path>) -> Result<Self> {
        match source {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Reads a JSON config file; keys it omits keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| GardenError::ConfigError {
            message: format!("invalid config file {}: {}", path.display(), e),
        })
    }

    /// `<platform config dir>/config.json`, when a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ecobloom").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Address string suitable for binding a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "port": 8080, "debug": true }"#).expect("write");

        let config = Config::load_from(Some(&path)).expect("load");

        assert_eq!(config.port, 8080);
        assert!(config.debug);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.data_file, PathBuf::from("plants.json"));
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().expect("tempdir");

        let err = Config::source(Some(&dir.path().join("nope.json"))).unwrap_err();

        assert!(matches!(err, GardenError::ConfigError { .. }));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, "port = 8080").expect("write");

        let err = Config::load_from(Some(&path)).unwrap_err();

        assert!(matches!(err, GardenError::ConfigError { .. }));
    }

    #[test]
    fn source_resolves_explicit_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").expect("write");

        assert_eq!(Config::source(Some(&path)).expect("source"), Some(path.clone()));
        assert_eq!(Config::load_from(None).expect("defaults"), Config::default());
    }
}
