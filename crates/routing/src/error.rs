//! Routing error types

use thiserror::Error;

/// Result type for routing operations
pub type Result<T> = std::result::Result<T, RoutingError>;

/// Errors that can occur during rule table compilation
///
/// Lookups never fail; these only surface while building the table.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Two rules for the same route
    #[error("duplicate rule for route '{route}'")]
    DuplicateRoute {
        /// Route that has duplicate rules
        route: String,
    },

    /// Rule with an empty route
    #[error("rule has an empty route")]
    EmptyRoute,

    /// Rule with an empty required field
    #[error("rule for route '{route}' has an empty {field}")]
    EmptyField {
        /// Route of the offending rule
        route: String,
        /// Name of the empty field
        field: &'static str,
    },
}

impl RoutingError {
    /// Create a DuplicateRoute error
    #[inline]
    pub fn duplicate_route(route: impl Into<String>) -> Self {
        Self::DuplicateRoute {
            route: route.into(),
        }
    }

    /// Create an EmptyField error
    #[inline]
    pub fn empty_field(route: impl Into<String>, field: &'static str) -> Self {
        Self::EmptyField {
            route: route.into(),
            field,
        }
    }
}
