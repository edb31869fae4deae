//! Gatecheck - Transform
//!
//! Validation steps that run inside an API-gateway request pipeline.
//!
//! # Overview
//!
//! A step reads values from the per-request context, derives a result,
//! and writes it back for downstream steps. The step shipped here is the
//! route-keyed code check:
//!
//! ```text
//! (route, raw value) → [RuleTable] → RuleEntry
//!                                  → [CodeSet::parse(ctx[codes_key])]
//!                                  → membership → ValidationOutcome
//!                                  → [OutcomeEmitter] → ctx
//! ```
//!
//! # Design Principles
//!
//! - **Decision separate from effect**: `Dispatcher` only reads the
//!   context; `OutcomeEmitter` only writes it
//! - **No failure outcomes as errors**: unknown routes, malformed codes and
//!   missing code sets all resolve to a `ValidationOutcome`
//! - **Context errors pass through**: a failing store is the only error a
//!   step surfaces
//! - **Thread-safe**: steps are `Send + Sync` and shared across requests
//!
//! # Modules
//!
//! - `codes` - Comma-separated code set parsing and normalization
//! - `dispatch` - Rule lookup and membership test
//! - `emit` - Writing outcomes into the context
//! - `chain` - Sequential step execution
//! - `code_check` - The route-keyed code check step
//!
//! # Example
//!
//! ```
//! use std::str::FromStr;
//! use gatecheck_config::Config;
//! use gatecheck_context::{Context, MemoryContext, Value};
//! use gatecheck_transform::{CodeCheckStep, Step};
//!
//! let config = Config::from_str(r#"
//! [[rules]]
//! route = "/bo-rpa/checking-account/debit/fraud"
//! codes_key = "fraud.historic.codes"
//! error = "DEBIT_FRAUD_INVALID_HISTORIC"
//! "#).unwrap();
//! let step = CodeCheckStep::from_config(&config).unwrap();
//!
//! let mut ctx = MemoryContext::new()
//!     .with("request.path", "/bo-rpa/checking-account/debit/fraud")
//!     .with("fraud.historic.codes", "10,20,30")
//!     .with("payload.historic", "99");
//! step.apply(&mut ctx).unwrap();
//!
//! assert_eq!(ctx.get("isValidCode").unwrap(), Some(Value::Bool(false)));
//! assert_eq!(
//!     ctx.get_text("errorType").unwrap().as_deref(),
//!     Some("DEBIT_FRAUD_INVALID_HISTORIC")
//! );
//! ```

mod chain;
pub mod code_check;
pub mod codes;
mod dispatch;
mod emit;
mod error;
mod outcome;

pub use chain::Chain;
pub use code_check::CodeCheckStep;
pub use codes::{Code, CodeSet};
pub use dispatch::Dispatcher;
pub use emit::OutcomeEmitter;
pub use error::StepError;
pub use outcome::{OutcomeKind, ValidationOutcome};

use gatecheck_context::Context;

/// Result type for step operations
pub type StepResult<T> = Result<T, StepError>;

/// A pipeline step operating on the per-request context
///
/// Implementors must be `Send + Sync`: one instance serves every request.
/// Steps are synchronous; they touch only in-memory data and the context
/// they are handed.
pub trait Step: Send + Sync {
    /// Run the step against one request's context
    fn apply(&self, ctx: &mut dyn Context) -> StepResult<()>;

    /// Name of this step for logging
    fn name(&self) -> &'static str;

    /// Whether this step is currently enabled
    ///
    /// Disabled steps are filtered out of chains at construction time.
    fn enabled(&self) -> bool {
        true
    }
}
