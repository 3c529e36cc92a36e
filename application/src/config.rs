//! [`Config`]-related definitions.

use std::path::PathBuf;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Store configuration.
    pub store: Store,

    /// Service configuration.
    pub service: Service,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Store configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Store {
    /// Directory to keep the snapshot files in.
    #[default(PathBuf::from("./data"))]
    pub path: PathBuf,
}

/// Service configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Service {
    /// Validation policy of inputs.
    pub validation: service::Validation,
}

impl From<Service> for service::Config {
    fn from(value: Service) -> Self {
        let Service { validation } = value;
        Self { validation }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::{fs, path::PathBuf};

    use service::Validation;
    use tempfile::TempDir;

    use super::{Config, LogLevel};

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");

        let config = Config::new(path.to_str().unwrap()).unwrap();

        assert_eq!(config.store.path, PathBuf::from("./data"));
        assert_eq!(config.service.validation, Validation::Lenient);
        assert_eq!(config.log.level, LogLevel::Info);
    }

    #[test]
    fn reads_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[store]\n\
             path = \"/var/lib/pos\"\n\
             [service]\n\
             validation = \"strict\"\n\
             [log]\n\
             level = \"DEBUG\"\n",
        )
        .unwrap();

        let config = Config::new(path.to_str().unwrap()).unwrap();

        assert_eq!(config.store.path, PathBuf::from("/var/lib/pos"));
        assert_eq!(config.service.validation, Validation::Strict);
        assert_eq!(config.log.level, LogLevel::Debug);
    }

    #[test]
    fn rejects_unknown_validation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[service]\nvalidation = \"paranoid\"\n").unwrap();

        assert!(Config::new(path.to_str().unwrap()).is_err());
    }
}
