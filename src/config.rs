use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_DB_PATH: &str = "todos.db";
const DEFAULT_MAX_STEPS: usize = 10;
const DEFAULT_CONFIG_PATH: &str = "config/talio.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model: String,
    pub db_path: PathBuf,
    pub max_steps: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    model: Option<String>,
    db_path: Option<PathBuf>,
    max_steps: Option<usize>,
}

impl AppConfig {
    /// Loads from the given path, or from the default path when present;
    /// a missing default file just means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return read_config(path);
        }
        match read_config(Path::new(DEFAULT_CONFIG_PATH)) {
            Ok(config) => Ok(config),
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                debug!("No config file found, using defaults");
                Ok(RawConfig::default().into())
            }
            Err(err) => Err(err),
        }
    }
}

impl From<RawConfig> for AppConfig {
    fn from(raw: RawConfig) -> Self {
        Self {
            model: raw.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            db_path: raw
                .db_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            max_steps: raw.max_steps.unwrap_or(DEFAULT_MAX_STEPS),
        }
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: RawConfig = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Loaded configuration");
    Ok(parsed.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_default_file_falls_back_to_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_PATH));
        assert_eq!(config.max_steps, DEFAULT_MAX_STEPS);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "model = \"gpt-4o-mini\"").unwrap();
        writeln!(file, "db_path = \"/tmp/other.db\"").unwrap();
        writeln!(file, "max_steps = 4").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.db_path, PathBuf::from("/tmp/other.db"));
        assert_eq!(config.max_steps, 4);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_steps = 2").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_steps, 2);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_steps = \"many\"").unwrap();

        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/talio.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
