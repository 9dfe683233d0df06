//! Configuration management for the budget assistant.
//!
//! Configuration can be set via environment variables:
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `5001`.
//! - `ESTIMATOR_CONFIG_PATH` - Optional. Path to a JSON file overriding the
//!   built-in estimation rules (ratio table, per-head costs, thresholds).
//!   Fields omitted from the file keep their defaults.

use std::path::Path;

use thiserror::Error;

use crate::estimator::{EstimatorConfig, RulesError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("Could not read estimator rules from {path}: {source}")]
    UnreadableRules {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid estimator rules in {path}: {source}")]
    MalformedRules {
        path: String,
        source: serde_json::Error,
    },

    #[error("Rejected estimator rules in {path}: {source}")]
    InvalidRules { path: String, source: RulesError },
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Estimation rules (ratio table, per-head costs, thresholds)
    pub estimator: EstimatorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5001,
            estimator: EstimatorConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `PORT` is not a valid port number, or if
    /// `ESTIMATOR_CONFIG_PATH` points at a file that is unreadable, is not
    /// valid JSON, or fails rule validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "5001".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let estimator = match std::env::var("ESTIMATOR_CONFIG_PATH") {
            Ok(path) => Self::load_rules(Path::new(&path))?,
            Err(_) => EstimatorConfig::default(),
        };

        Ok(Self {
            host,
            port,
            estimator,
        })
    }

    /// Load and validate estimation rules from a JSON file.
    pub fn load_rules(path: &Path) -> Result<EstimatorConfig, ConfigError> {
        let display = path.display().to_string();

        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::UnreadableRules {
            path: display.clone(),
            source: e,
        })?;

        let rules: EstimatorConfig =
            serde_json::from_str(&contents).map_err(|e| ConfigError::MalformedRules {
                path: display.clone(),
                source: e,
            })?;

        rules.validate().map_err(|e| ConfigError::InvalidRules {
            path: display,
            source: e,
        })?;

        Ok(rules)
    }
}
