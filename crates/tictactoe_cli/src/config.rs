//! CLI configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::instrument;

/// Settings for the `tictactoe` binary.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CliConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Emit JSON instead of text.
    #[serde(default)]
    json: bool,

    /// Include search node counts in text output.
    #[serde(default = "default_show_nodes")]
    show_nodes: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_show_nodes() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json: false,
            show_nodes: default_show_nodes(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
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
        assert!(!*config.json());
        assert!(*config.show_nodes());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_filter = \"debug,tictactoe_engine=trace\"").unwrap();
        writeln!(file, "show_nodes = false").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.log_filter(), "debug,tictactoe_engine=trace");
        assert!(!*config.show_nodes());
        assert!(!*config.json());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "json = \"sometimes\"").unwrap();

        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
