//! Persisted desk settings stored as TOML under the `.riskdesk` root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// User-editable settings for the desk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the risk-management backend.
    pub backend_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

/// Errors raised while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The application directory could not be prepared.
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
    /// The settings file exists but could not be read.
    #[error("Failed to read settings file {path}: {source}")]
    ReadFile {
        /// Settings file path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The settings file exists but is not valid TOML.
    #[error("Failed to parse settings file {path}: {source}")]
    ParseToml {
        /// Settings file path.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
    /// The settings could not be serialized for writing.
    #[error("Failed to serialize settings: {0}")]
    SerializeToml(toml::ser::Error),
    /// The settings file could not be written.
    #[error("Failed to write settings file {path}: {source}")]
    WriteFile {
        /// Settings file path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Load settings from the default location, writing defaults on first run.
pub fn load_or_default() -> Result<Settings, ConfigError> {
    let path = settings_path()?;
    if !path.exists() {
        let settings = Settings::default();
        save_to(&path, &settings)?;
        return Ok(settings);
    }
    load_from(&path)
}

/// Load settings from an explicit path.
pub fn load_from(path: &Path) -> Result<Settings, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Write settings to an explicit path.
pub fn save_to(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
    let data = toml::to_string_pretty(settings).map_err(ConfigError::SerializeToml)?;
    std::fs::write(path, data).map_err(|source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

fn settings_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn settings_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let settings = Settings {
            backend_url: "http://10.0.0.7:8080".to_string(),
        };
        save_to(&path, &settings).unwrap();
        assert_eq!(load_from(&path).unwrap(), settings);
    }

    #[test]
    fn malformed_settings_report_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "backend_url = [not toml").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(Settings::default().backend_url, "http://127.0.0.1:5000");
    }
}
