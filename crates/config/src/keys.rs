//! Context key configuration
//!
//! Names of the context keys a validation step reads and writes. The
//! defaults match the keys the gateway's historic-code step has always
//! used, so existing downstream steps keep working.
//!
//! # Example
//!
//! ```toml
//! [keys]
//! route = "request.path"
//! input = "payload.historic"
//!
//! [output]
//! valid_key = "isValidCode"
//! error_key = "errorType"
//! reason_key = "validationReason"
//! missing_classification = "omit"
//! ```

use serde::Deserialize;

/// Where the step finds its inputs
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeysConfig {
    /// Key holding the request route
    /// Default: `request.path`
    pub route: String,

    /// Key holding the value to validate
    /// Default: `payload.historic`
    pub input: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            route: "request.path".to_string(),
            input: "payload.historic".to_string(),
        }
    }
}

/// What to write under `error_key` when an outcome has no classification
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissingClassification {
    /// Leave the key untouched (default)
    #[default]
    Omit,
    /// Write this marker string
    Sentinel(String),
}

/// Where the step writes its outcome
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Key receiving the boolean result
    /// Default: `isValidCode`
    pub valid_key: String,

    /// Key receiving the error classification
    /// Default: `errorType`
    pub error_key: String,

    /// Optional key receiving why the check failed
    /// (`accepted`, `invalid_code`, `unknown_route`)
    pub reason_key: Option<String>,

    /// Behavior when there is no classification to write
    pub missing_classification: MissingClassification,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            valid_key: "isValidCode".to_string(),
            error_key: "errorType".to_string(),
            reason_key: None,
            missing_classification: MissingClassification::Omit,
        }
    }
}
