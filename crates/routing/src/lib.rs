//! Gatecheck - Routing
//!
//! Pre-compiled rule table for O(1) route→rule lookup.
//!
//! # Design
//!
//! Which code set applies to a request, and which error label a failed
//! check carries, is data, not control flow. The table is compiled once
//! from configuration and is read-only afterwards, so it can be shared
//! across requests behind an `Arc` without locking.
//!
//! - Exact-match lookup only; no prefix or pattern matching
//! - An unmapped route is `None`, never an error
//! - Each route maps to at most one rule (enforced by the builder)
//!
//! # Example
//!
//! ```
//! use gatecheck_routing::{CodeKind, Route, RuleEntry, RuleTableBuilder};
//!
//! let mut builder = RuleTableBuilder::new();
//! builder
//!     .add_rule(RuleEntry::new(
//!         "/bo-rpa/checking-account/debit/fraud",
//!         "fraud.historic.codes",
//!         "DEBIT_FRAUD_INVALID_HISTORIC",
//!     ))
//!     .unwrap();
//! let table = builder.build();
//!
//! let rule = table.lookup("/bo-rpa/checking-account/debit/fraud").unwrap();
//! assert_eq!(rule.codes_key(), "fraud.historic.codes");
//! assert_eq!(rule.kind(), CodeKind::Integer);
//!
//! assert!(table.lookup(&Route::new("/unknown/path")).is_none());
//! ```

mod error;
mod route;
mod rule;
mod table;

#[cfg(test)]
mod table_test;

pub use error::{Result, RoutingError};
pub use route::Route;
pub use rule::{CodeKind, RuleEntry};
pub use table::{RuleTable, RuleTableBuilder};
