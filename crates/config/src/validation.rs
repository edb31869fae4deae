//! Configuration validation
//!
//! Validates config consistency:
//! - Input and output key names are non-empty
//! - Output keys don't overwrite each other or the step's input keys
//! - Sentinel marker is non-empty
//! - Rules have a route, codes key and error classification
//! - No two enabled rules share a route

use std::collections::HashSet;

use crate::Config;
use crate::error::{ConfigError, Result};
use crate::keys::MissingClassification;

#[cfg(test)]
#[path = "validation_test.rs"]
mod tests;

/// Validate the entire configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_keys(config)?;
    validate_output(config)?;
    validate_rules(config)?;
    Ok(())
}

fn validate_keys(config: &Config) -> Result<()> {
    if config.keys.route.is_empty() {
        return Err(ConfigError::missing_field("keys", "keys", "route"));
    }
    if config.keys.input.is_empty() {
        return Err(ConfigError::missing_field("keys", "keys", "input"));
    }
    Ok(())
}

fn validate_output(config: &Config) -> Result<()> {
    let output = &config.output;

    if output.valid_key.is_empty() {
        return Err(ConfigError::missing_field("output", "output", "valid_key"));
    }
    if output.error_key.is_empty() {
        return Err(ConfigError::missing_field("output", "output", "error_key"));
    }
    if output.valid_key == output.error_key {
        return Err(ConfigError::key_collision(
            &output.valid_key,
            "valid_key",
            "error_key",
        ));
    }

    if let Some(ref reason_key) = output.reason_key {
        if reason_key.is_empty() {
            return Err(ConfigError::missing_field("output", "output", "reason_key"));
        }
        if *reason_key == output.valid_key {
            return Err(ConfigError::key_collision(reason_key, "valid_key", "reason_key"));
        }
        if *reason_key == output.error_key {
            return Err(ConfigError::key_collision(reason_key, "error_key", "reason_key"));
        }
    }

    let written = [
        (output.valid_key.as_str(), "valid_key"),
        (output.error_key.as_str(), "error_key"),
    ]
    .into_iter()
    .chain(output.reason_key.as_deref().map(|key| (key, "reason_key")));

    for (key, name) in written {
        if key == config.keys.route {
            return Err(ConfigError::key_collision(key, "route", name));
        }
        if key == config.keys.input {
            return Err(ConfigError::key_collision(key, "input", name));
        }
    }

    if let MissingClassification::Sentinel(ref marker) = output.missing_classification
        && marker.is_empty()
    {
        return Err(ConfigError::invalid_value(
            "output",
            "output",
            "missing_classification",
            "sentinel marker must not be empty",
        ));
    }

    Ok(())
}

fn validate_rules(config: &Config) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();

    for (i, rule) in config.rules.iter().enumerate() {
        if rule.route.is_empty() {
            return Err(ConfigError::missing_field("rule", format!("#{}", i), "route"));
        }
        if rule.codes_key.is_empty() {
            return Err(ConfigError::missing_field("rule", &rule.route, "codes_key"));
        }
        if rule.error.is_empty() {
            return Err(ConfigError::missing_field("rule", &rule.route, "error"));
        }

        // Only enabled rules need unique routes
        if rule.enabled && !seen.insert(rule.route.as_str()) {
            return Err(ConfigError::duplicate_route(&rule.route));
        }
    }

    Ok(())
}
