//! Rule dispatch
//!
//! Turns `(route, raw value)` into a `ValidationOutcome`:
//!
//! 1. Look the route up in the `RuleTable`; no rule ⇒ `UnknownRoute`
//! 2. Read the rule's code set string from the context; missing ⇒ empty set
//! 3. Normalize the value like the codes and test membership
//!
//! The dispatcher reads the context but never writes it.

use std::sync::Arc;

use gatecheck_context::{Context, Result as ContextResult};
use gatecheck_routing::RuleTable;

use crate::codes::CodeSet;
use crate::outcome::ValidationOutcome;

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod tests;

/// Evaluates values against a shared rule table
#[derive(Debug, Clone)]
pub struct Dispatcher {
    table: Arc<RuleTable>,
}

impl Dispatcher {
    /// Create a dispatcher over a rule table
    pub fn new(table: impl Into<Arc<RuleTable>>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// The rule table this dispatcher consults
    #[inline]
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Evaluate a raw value for a route
    ///
    /// The result depends only on the route, the value and the current
    /// contents of the rule's code set key.
    ///
    /// # Errors
    ///
    /// Only context read failures; every validation failure is an outcome.
    pub fn evaluate(
        &self,
        route: &str,
        raw_value: &str,
        ctx: &dyn Context,
    ) -> ContextResult<ValidationOutcome> {
        let Some(rule) = self.table.lookup(route) else {
            tracing::debug!(route, "no rule for route");
            return Ok(ValidationOutcome::unknown_route());
        };

        let codes = match ctx.get_text(rule.codes_key())? {
            Some(raw) => CodeSet::parse(&raw, rule.kind()),
            None => {
                tracing::debug!(
                    route,
                    codes_key = rule.codes_key(),
                    "code set key not set, treating as empty"
                );
                CodeSet::empty()
            }
        };

        let outcome = if codes.accepts(raw_value, rule.kind()) {
            ValidationOutcome::accepted()
        } else {
            ValidationOutcome::invalid_code(rule.error_classification())
        };

        tracing::debug!(
            route,
            value = raw_value,
            codes = codes.len(),
            valid = outcome.is_valid(),
            "evaluated code"
        );

        Ok(outcome)
    }
}
