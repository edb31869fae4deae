//! Rule table for O(1) route→rule lookup
//!
//! The table is compiled once at startup from configuration. All
//! allocations happen during compilation; lookups only hash the route.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::{Result, Route, RoutingError, RuleEntry};

/// Pre-compiled rule table
///
/// Maps routes to their validation rule. Immutable once built: adding a
/// route means building a new table.
///
/// # Example
///
/// ```
/// use gatecheck_routing::{RuleEntry, RuleTableBuilder};
///
/// let mut builder = RuleTableBuilder::new();
/// builder
///     .add_rule(RuleEntry::new("/credit/bill", "bill.credit.historic.codes", "CREDIT_BILL"))
///     .unwrap();
/// let table = builder.build();
///
/// assert!(table.lookup("/credit/bill").is_some());
/// assert!(table.lookup("/credit").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    /// Pre-compiled rules: route → rule
    rules: HashMap<Route, RuleEntry>,
}

impl RuleTable {
    /// Create an empty table (every route is unknown)
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up the rule for a route
    ///
    /// Exact match only. Accepts `&Route` or `&str`.
    #[inline]
    pub fn lookup<Q>(&self, route: &Q) -> Option<&RuleEntry>
    where
        Route: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.rules.get(route)
    }

    /// Check if a route has a rule
    #[inline]
    pub fn contains<Q>(&self, route: &Q) -> bool
    where
        Route: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.rules.contains_key(route)
    }

    /// Number of rules
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table has no rules
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over all rules (unordered)
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &RuleEntry> {
        self.rules.values()
    }

    /// All routes, sorted
    pub fn routes(&self) -> Vec<&Route> {
        let mut routes: Vec<&Route> = self.rules.keys().collect();
        routes.sort();
        routes
    }
}

/// Builder for constructing rule tables from configuration
///
/// Rejects malformed and duplicate rules as they are added, so `build()`
/// itself cannot fail.
#[derive(Debug, Default)]
pub struct RuleTableBuilder {
    rules: HashMap<Route, RuleEntry>,
}

impl RuleTableBuilder {
    /// Create a new builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with pre-allocated capacity
    #[inline]
    #[must_use]
    pub fn with_capacity(rules: usize) -> Self {
        Self {
            rules: HashMap::with_capacity(rules),
        }
    }

    /// Add a rule
    ///
    /// # Errors
    ///
    /// - `EmptyRoute` if the route is empty
    /// - `EmptyField` if the codes key or classification is empty
    /// - `DuplicateRoute` if the route already has a rule
    pub fn add_rule(&mut self, entry: RuleEntry) -> Result<&mut Self> {
        if entry.route().is_empty() {
            return Err(RoutingError::EmptyRoute);
        }
        if entry.codes_key().is_empty() {
            return Err(RoutingError::empty_field(entry.route().as_str(), "codes_key"));
        }
        if entry.error_classification().is_empty() {
            return Err(RoutingError::empty_field(
                entry.route().as_str(),
                "error_classification",
            ));
        }
        if self.rules.contains_key(entry.route()) {
            return Err(RoutingError::duplicate_route(entry.route().as_str()));
        }

        self.rules.insert(entry.route().clone(), entry);
        Ok(self)
    }

    /// Add several rules, stopping at the first invalid one
    pub fn add_rules(&mut self, entries: impl IntoIterator<Item = RuleEntry>) -> Result<&mut Self> {
        for entry in entries {
            self.add_rule(entry)?;
        }
        Ok(self)
    }

    /// Number of rules added so far
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if no rules were added
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Build the rule table
    pub fn build(self) -> RuleTable {
        tracing::debug!(rules = self.rules.len(), "compiled rule table");
        RuleTable { rules: self.rules }
    }
}
