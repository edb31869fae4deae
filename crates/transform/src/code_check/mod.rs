//! Code Check Step - Validate a request value against its route's codes
//!
//! Reads the route and the value from the context, dispatches on the
//! route, and writes the outcome back.
//!
//! # Job To Be Done
//!
//! Reject requests whose code (e.g. a historic transaction code) is not
//! accepted for the operation being called, and tell downstream steps
//! which error message to return.
//!
//! # Configuration
//!
//! | Section | Option | Default | Description |
//! |---------|--------|---------|-------------|
//! | `keys` | `route` | `request.path` | Context key holding the route |
//! | `keys` | `input` | `payload.historic` | Context key holding the value |
//! | `output` | `valid_key` | `isValidCode` | Boolean result |
//! | `output` | `error_key` | `errorType` | Error classification |
//! | `output` | `reason_key` | unset | Outcome kind |
//! | `output` | `missing_classification` | `"omit"` | `"omit"` or `{ sentinel = "..." }` |
//! | `rules` | `route`, `codes_key`, `error`, `kind` | | One entry per route |
//!
//! # Inputs
//!
//! A missing route reads as the empty route (no rule). A missing value
//! never matches, so a known route reports its classification.

use gatecheck_config::{CodeKindConfig, Config, KeysConfig};
use gatecheck_context::Context;
use gatecheck_routing::{CodeKind, RuleEntry, RuleTableBuilder};

use crate::dispatch::Dispatcher;
use crate::emit::OutcomeEmitter;
use crate::outcome::ValidationOutcome;
use crate::{Step, StepResult};

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

/// Route-keyed code validation step
#[derive(Debug, Clone)]
pub struct CodeCheckStep {
    route_key: String,
    input_key: String,
    dispatcher: Dispatcher,
    emitter: OutcomeEmitter,
}

impl CodeCheckStep {
    /// Create a step from its parts
    pub fn new(keys: &KeysConfig, dispatcher: Dispatcher, emitter: OutcomeEmitter) -> Self {
        Self {
            route_key: keys.route.clone(),
            input_key: keys.input.clone(),
            dispatcher,
            emitter,
        }
    }

    /// Build a step from configuration
    ///
    /// Disabled rules are skipped.
    ///
    /// # Errors
    ///
    /// `StepError::Routing` if the enabled rules don't form a valid table.
    pub fn from_config(config: &Config) -> StepResult<Self> {
        let mut builder = RuleTableBuilder::with_capacity(config.rules.len());
        for rule in config.enabled_rules() {
            let kind = match rule.kind {
                CodeKindConfig::Integer => CodeKind::Integer,
                CodeKindConfig::Text => CodeKind::Text,
            };
            builder.add_rule(
                RuleEntry::new(rule.route.as_str(), rule.codes_key.as_str(), rule.error.as_str())
                    .with_kind(kind),
            )?;
        }

        let table = builder.build();
        tracing::info!(rules = table.len(), "code check step ready");

        Ok(Self::new(
            &config.keys,
            Dispatcher::new(table),
            OutcomeEmitter::from(&config.output),
        ))
    }

    /// The dispatcher this step evaluates with
    #[inline]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Read inputs and evaluate without writing anything
    pub fn evaluate(&self, ctx: &dyn Context) -> StepResult<ValidationOutcome> {
        let route = ctx.get_text(&self.route_key)?.unwrap_or_default();
        let value = ctx.get_text(&self.input_key)?.unwrap_or_default();

        Ok(self.dispatcher.evaluate(&route, &value, ctx)?)
    }

    /// Evaluate, write the outcome, and return it
    pub fn check(&self, ctx: &mut dyn Context) -> StepResult<ValidationOutcome> {
        let outcome = self.evaluate(&*ctx)?;
        self.emitter.emit(&outcome, ctx)?;
        Ok(outcome)
    }
}

impl Step for CodeCheckStep {
    fn apply(&self, ctx: &mut dyn Context) -> StepResult<()> {
        self.check(ctx).map(|_| ())
    }

    fn name(&self) -> &'static str {
        "code_check"
    }
}
