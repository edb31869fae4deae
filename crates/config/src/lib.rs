//! Gatecheck Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! Key names default to the ones the gateway already uses, so a config
//! usually only lists its rules.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use gatecheck_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str(r#"
//! [[rules]]
//! route = "/bo-rpa/checking-account/debit/fraud"
//! codes_key = "fraud.historic.codes"
//! error = "DEBIT_FRAUD_INVALID_HISTORIC"
//! "#).unwrap();
//!
//! assert_eq!(config.rules.len(), 1);
//! assert_eq!(config.keys.route, "request.path");
//! ```
//!
//! # Example Full Config
//!
//! See `configs/historic.toml` for all available options.

mod error;
mod keys;
mod logging;
mod rules;
mod validation;

use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use error::{ConfigError, Result};
pub use keys::{KeysConfig, MissingClassification, OutputConfig};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use rules::{CodeKindConfig, RuleConfig};

use serde::Deserialize;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub log: LogConfig,

    /// Context keys the step reads its inputs from
    pub keys: KeysConfig,

    /// Context keys the step writes its outcome to
    pub output: OutputConfig,

    /// Validation rules, one per route
    pub rules: Vec<RuleConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read, contains invalid TOML, or
    /// fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string
    ///
    /// Prefer using the `FromStr` trait implementation.
    fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Checks for:
    /// - Empty key names
    /// - Output keys that overwrite each other or the input keys
    /// - Rules with empty fields
    /// - Duplicate routes among enabled rules
    fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    /// Enabled rules only
    pub fn enabled_rules(&self) -> impl Iterator<Item = &RuleConfig> {
        self.rules.iter().filter(|r| r.enabled)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
