//! Outcome emission
//!
//! Writes a `ValidationOutcome` into the context for downstream steps:
//!
//! | Key | Written | Value |
//! |-----|---------|-------|
//! | `valid_key` | always | `Bool` |
//! | `error_key` | classification present | the classification |
//! | `error_key` | no classification, `Sentinel` policy | the marker |
//! | `error_key` | no classification, `Omit` policy | untouched |
//! | `reason_key` | when configured | `accepted` / `invalid_code` / `unknown_route` |
//!
//! Emitting the same outcome twice leaves the context unchanged after the
//! first write.

use gatecheck_config::{MissingClassification, OutputConfig};
use gatecheck_context::{Context, Result as ContextResult, Value};

use crate::outcome::ValidationOutcome;

#[cfg(test)]
#[path = "emit_test.rs"]
mod tests;

/// Writes outcomes under configured context keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeEmitter {
    valid_key: String,
    error_key: String,
    reason_key: Option<String>,
    missing: MissingClassification,
}

impl OutcomeEmitter {
    /// Create an emitter with the `Omit` policy and no reason key
    pub fn new(valid_key: impl Into<String>, error_key: impl Into<String>) -> Self {
        Self {
            valid_key: valid_key.into(),
            error_key: error_key.into(),
            reason_key: None,
            missing: MissingClassification::Omit,
        }
    }

    /// Also write the outcome kind under `key`
    #[must_use]
    pub fn with_reason_key(mut self, key: impl Into<String>) -> Self {
        self.reason_key = Some(key.into());
        self
    }

    /// Set what to write when there is no classification
    #[must_use]
    pub fn with_missing(mut self, missing: MissingClassification) -> Self {
        self.missing = missing;
        self
    }

    /// Key receiving the boolean result
    #[inline]
    pub fn valid_key(&self) -> &str {
        &self.valid_key
    }

    /// Key receiving the classification
    #[inline]
    pub fn error_key(&self) -> &str {
        &self.error_key
    }

    /// Write an outcome into the context
    ///
    /// # Errors
    ///
    /// Only context write failures.
    pub fn emit(&self, outcome: &ValidationOutcome, ctx: &mut dyn Context) -> ContextResult<()> {
        ctx.set(&self.valid_key, Value::Bool(outcome.is_valid()))?;

        match (outcome.error_classification(), &self.missing) {
            (Some(classification), _) => {
                ctx.set(&self.error_key, Value::from(classification))?;
            }
            (None, MissingClassification::Sentinel(marker)) => {
                ctx.set(&self.error_key, Value::from(marker.as_str()))?;
            }
            (None, MissingClassification::Omit) => {}
        }

        if let Some(ref reason_key) = self.reason_key {
            ctx.set(reason_key, Value::from(outcome.kind().as_str()))?;
        }

        Ok(())
    }
}

impl Default for OutcomeEmitter {
    fn default() -> Self {
        Self::from(&OutputConfig::default())
    }
}

impl From<&OutputConfig> for OutcomeEmitter {
    fn from(config: &OutputConfig) -> Self {
        Self {
            valid_key: config.valid_key.clone(),
            error_key: config.error_key.clone(),
            reason_key: config.reason_key.clone(),
            missing: config.missing_classification.clone(),
        }
    }
}
