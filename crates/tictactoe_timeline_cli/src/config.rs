//! Display configuration for the terminal driver.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_timeline::MoveOrder;
use tracing::{debug, info, instrument};

/// Configuration loaded from an optional TOML file.
///
/// ```toml
/// move_order = "descending"
/// show_coordinates = false
/// log_filter = "tictactoe_timeline=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Initial order of the move list.
    #[serde(default)]
    move_order: MoveOrder,

    /// Print row/column guides around the board.
    #[serde(default = "default_show_coordinates")]
    show_coordinates: bool,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_show_coordinates() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            move_order: MoveOrder::default(),
            show_coordinates: default_show_coordinates(),
            log_filter: default_log_filter(),
        }
    }
}

impl ViewConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(move_order = %config.move_order, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Overrides the move order.
    pub fn with_move_order(mut self, move_order: MoveOrder) -> Self {
        self.move_order = move_order;
        self
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

    #[test]
    fn test_defaults() {
        let config = ViewConfig::default();
        assert_eq!(*config.move_order(), MoveOrder::Ascending);
        assert!(*config.show_coordinates());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ViewConfig::from_toml("move_order = \"descending\"").unwrap();
        assert_eq!(*config.move_order(), MoveOrder::Descending);
        assert!(*config.show_coordinates());
    }

    #[test]
    fn test_bad_order_is_rejected() {
        let err = ViewConfig::from_toml("move_order = \"sideways\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
