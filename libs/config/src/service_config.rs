//! Inspector Configuration Module
//!
//! Loads settings for the message inspector from an optional TOML file with
//! environment variable overrides (`FRAME_` prefix, `__` between nested keys,
//! e.g. `FRAME_LIMITS__MAX_INPUT_LEN=4096`).

use crate::limits::InputLimits;
use anyhow::{Context, Result};
use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File read when no explicit path is given; absence is not an error
pub const DEFAULT_CONFIG_PATH: &str = "config/inspector.toml";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "FRAME";

/// Main inspector configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct InspectorConfig {
    /// Stop at the first rejected message
    pub fail_fast: bool,

    pub logging: LoggingConfig,

    pub limits: InputLimits,
}

/// Log output settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `frame_codec=debug`
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Where the file layer of a loaded configuration comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given by the caller
    Explicit(PathBuf),
    /// [`DEFAULT_CONFIG_PATH`] exists
    DefaultFile,
    /// No file; built-in defaults plus environment overrides
    Defaults,
}

impl ConfigSource {
    pub fn resolve(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::Explicit(path.to_path_buf()),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Self::DefaultFile,
            None => Self::Defaults,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(path) => write!(f, "{}", path.display()),
            Self::DefaultFile => write!(f, "{}", DEFAULT_CONFIG_PATH),
            Self::Defaults => write!(f, "defaults + {}_* environment", ENV_PREFIX),
        }
    }
}

impl InspectorConfig {
    /// Load configuration from a file with environment overrides
    ///
    /// An explicit `path` must exist; without one, [`DEFAULT_CONFIG_PATH`] is
    /// used if present and defaults apply otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        builder = match path {
            Some(path) => {
                info!("Loading inspector config: {:?}", path);
                builder.add_source(File::from(path).required(true))
            }
            None => {
                debug!("Looking for optional config at {}", DEFAULT_CONFIG_PATH);
                builder.add_source(File::with_name(DEFAULT_CONFIG_PATH).required(false))
            }
        };

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_file_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("inspector.toml");

        let config_content = r#"
fail_fast = true

[logging]
level = "frame_codec=debug"
json = true
"#;

        fs::write(&config_path, config_content).unwrap();

        let config = InspectorConfig::load(Some(&config_path)).unwrap();

        assert!(config.fail_fast);
        assert_eq!(config.logging.level, "frame_codec=debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(InspectorConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_environment_override() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("inspector.toml");
        fs::write(&config_path, "[limits]\nmax_input_len = 128\n").unwrap();

        std::env::set_var("FRAME_LIMITS__MAX_INPUT_LEN", "4096");
        let result = InspectorConfig::load(Some(&config_path));
        std::env::remove_var("FRAME_LIMITS__MAX_INPUT_LEN");

        assert_eq!(result.unwrap().limits.max_input_len, 4096);
    }

    #[test]
    fn test_config_source_display() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("inspector.toml");

        let source = ConfigSource::resolve(Some(&config_path));
        assert_eq!(source, ConfigSource::Explicit(config_path.clone()));
        assert_eq!(source.to_string(), config_path.display().to_string());

        assert_eq!(ConfigSource::DefaultFile.to_string(), DEFAULT_CONFIG_PATH);
        assert_eq!(ConfigSource::Defaults.to_string(), "defaults + FRAME_* environment");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = InspectorConfig::default();
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("max_input_len = 65536"));

        let parsed: InspectorConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
