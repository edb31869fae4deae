//! Step error types
//!
//! Validation failures are outcomes, not errors. These cover the store
//! failing underneath a step and rule tables that fail to build.

use gatecheck_context::ContextError;
use gatecheck_routing::RoutingError;
use thiserror::Error;

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

/// Errors that can occur while building or running a step
#[derive(Debug, Error)]
pub enum StepError {
    /// The context store failed
    #[error(transparent)]
    Context(#[from] ContextError),

    /// The rule table could not be built
    #[error("invalid rule table: {0}")]
    Routing(#[from] RoutingError),
}
