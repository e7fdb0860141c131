//! Driver configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for the command-line driver.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Print the point-winner history when the game ends.
    #[serde(default = "default_show_history")]
    show_history: bool,

    /// Prompt shown before reading a point winner.
    #[serde(default = "default_prompt")]
    prompt: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_show_history() -> bool {
    true
}

fn default_prompt() -> String {
    "Point won by (PLAYER_ONE/PLAYER_TWO): ".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            show_history: default_show_history(),
            prompt: default_prompt(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_filter = %config.log_filter, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration, falling back to defaults if the file is missing.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_filter(), "warn");
        assert!(*config.show_history());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_history = false").unwrap();
        writeln!(file, "log_filter = \"strictly_tennis=debug\"").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert!(!*config.show_history());
        assert_eq!(config.log_filter(), "strictly_tennis=debug");
        assert_eq!(config.prompt(), &default_prompt());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_history = \"sometimes\"").unwrap();

        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().starts_with("Config error:"));
    }
}
