//! Configuration error types

use std::io;
use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file
    #[error("failed to read config file '{path}': {source}")]
    IoError {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Two enabled rules share a route
    #[error("route '{route}' has more than one enabled rule")]
    DuplicateRoute {
        /// The conflicting route
        route: String,
    },

    /// Two key fields name the same context key
    #[error("'{first}' and '{second}' both name context key '{key}'")]
    KeyCollision {
        /// Context key written twice
        key: String,
        /// First config field
        first: &'static str,
        /// Second config field
        second: &'static str,
    },

    /// Validation error - required field missing
    #[error("{component} '{name}' is missing required field '{field}'")]
    MissingField {
        /// Component type (e.g., "rule", "output")
        component: &'static str,
        /// Name of the component
        name: String,
        /// Missing field name
        field: &'static str,
    },

    /// Validation error - invalid value
    #[error("{component} '{name}' has invalid {field}: {message}")]
    InvalidValue {
        /// Component type
        component: &'static str,
        /// Name of the component
        name: String,
        /// Field name
        field: &'static str,
        /// Error message
        message: String,
    },
}

impl ConfigError {
    /// Create a DuplicateRoute error
    pub fn duplicate_route(route: impl Into<String>) -> Self {
        Self::DuplicateRoute {
            route: route.into(),
        }
    }

    /// Create a KeyCollision error
    pub fn key_collision(key: impl Into<String>, first: &'static str, second: &'static str) -> Self {
        Self::KeyCollision {
            key: key.into(),
            first,
            second,
        }
    }

    /// Create a MissingField error
    pub fn missing_field(
        component: &'static str,
        name: impl Into<String>,
        field: &'static str,
    ) -> Self {
        Self::MissingField {
            component,
            name: name.into(),
            field,
        }
    }

    /// Create an InvalidValue error
    pub fn invalid_value(
        component: &'static str,
        name: impl Into<String>,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            component,
            name: name.into(),
            field,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_route_error() {
        let err = ConfigError::duplicate_route("/debit/fraud");
        assert!(err.to_string().contains("/debit/fraud"));
        assert!(err.to_string().contains("more than one"));
    }

    #[test]
    fn test_key_collision_error() {
        let err = ConfigError::key_collision("errorType", "valid_key", "error_key");
        assert!(err.to_string().contains("errorType"));
        assert!(err.to_string().contains("valid_key"));
        assert!(err.to_string().contains("error_key"));
    }

    #[test]
    fn test_missing_field_error() {
        let err = ConfigError::missing_field("rule", "/credit/bill", "codes_key");
        assert!(err.to_string().contains("rule"));
        assert!(err.to_string().contains("/credit/bill"));
        assert!(err.to_string().contains("codes_key"));
    }

    #[test]
    fn test_invalid_value_error() {
        let err = ConfigError::invalid_value(
            "output",
            "missing_classification",
            "sentinel",
            "must not be empty",
        );
        assert!(err.to_string().contains("missing_classification"));
        assert!(err.to_string().contains("must not be empty"));
    }
}
