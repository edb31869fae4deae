//! Rule configuration
//!
//! One `[[rules]]` entry per route. A rule names the context key holding
//! the route's accepted codes and the error label reported on failure.
//!
//! # Example
//!
//! ```toml
//! [[rules]]
//! route = "/bo-rpa/checking-account/debit/fraud"
//! codes_key = "fraud.historic.codes"
//! error = "DEBIT_FRAUD_INVALID_HISTORIC"
//!
//! [[rules]]
//! route = "/bo-rpa/cards/regenerate"
//! codes_key = "regenerate.reasons.values"
//! error = "INVALID_REGENERATE_REASON"
//! kind = "text"
//! ```

use serde::Deserialize;

/// How codes are compared
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CodeKindConfig {
    /// Integer codes (default)
    #[default]
    Integer,
    /// Free-text codes
    Text,
}

/// A single validation rule
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RuleConfig {
    /// Exact request route this rule applies to
    pub route: String,

    /// Context key holding the comma-separated accepted codes
    pub codes_key: String,

    /// Error classification written when the value is not accepted
    pub error: String,

    /// Code comparison mode
    #[serde(default)]
    pub kind: CodeKindConfig,

    /// Whether this rule is active (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl RuleConfig {
    /// Create an enabled integer rule
    pub fn new(
        route: impl Into<String>,
        codes_key: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            route: route.into(),
            codes_key: codes_key.into(),
            error: error.into(),
            kind: CodeKindConfig::Integer,
            enabled: true,
        }
    }
}
