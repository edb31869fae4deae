//! Step Chain - Sequential context transformation
//!
//! The `Chain` applies multiple steps in sequence to one request's
//! context, the way the gateway runs its policies.
//!
//! # Design
//!
//! - **Zero-cost when empty**: Empty chain is a no-op
//! - **Sequential execution**: Each step sees the writes of the previous ones
//! - **Fail-fast**: First error stops the chain

use gatecheck_context::Context;

use crate::{Step, StepResult};

#[cfg(test)]
#[path = "chain_test.rs"]
mod tests;

/// Chain of steps applied sequentially
///
/// Steps are applied in the order they were added. If any step returns an
/// error, the chain stops and returns that error.
pub struct Chain {
    /// Ordered list of steps
    steps: Vec<Box<dyn Step>>,
}

impl Chain {
    /// Create a new step chain
    ///
    /// Only enabled steps are included in the chain.
    pub fn new(steps: Vec<Box<dyn Step>>) -> Self {
        Self {
            steps: steps.into_iter().filter(|s| s.enabled()).collect(),
        }
    }

    /// Create an empty chain (no-op)
    pub fn empty() -> Self {
        Self { steps: Vec::new() }
    }

    /// Get the number of active steps
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the chain is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get the names of all active steps
    pub fn names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run every step against the context in order
    ///
    /// # Error Handling
    ///
    /// If any step fails, the chain stops immediately; writes made by
    /// earlier steps stay in the context.
    pub fn run(&self, ctx: &mut dyn Context) -> StepResult<()> {
        for step in &self.steps {
            if let Err(e) = step.apply(ctx) {
                tracing::warn!(step = step.name(), error = %e, "step failed");
                return Err(e);
            }
        }

        Ok(())
    }

    /// Get a step by name
    pub fn get(&self, name: &str) -> Option<&dyn Step> {
        self.steps
            .iter()
            .find(|s| s.name() == name)
            .map(|s| s.as_ref())
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::empty()
    }
}
