//! Route identifier type

use std::borrow::Borrow;
use std::fmt;

/// Identifier of a logical API operation (the normalized request path)
///
/// Used only as a lookup key. Implements `Borrow<str>` so the rule table
/// can be queried with a plain `&str` taken straight from the context.
///
/// # Example
///
/// ```
/// use gatecheck_routing::Route;
///
/// let route = Route::new("/bo-rpa/checking-account/credit/bill");
/// assert_eq!(route.as_str(), "/bo-rpa/checking-account/credit/bill");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Route(String);

impl Route {
    /// Create a new route
    #[inline]
    pub fn new(route: impl Into<String>) -> Self {
        Self(route.into())
    }

    /// Get the route as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check for the empty route
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Route {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Route {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Route {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Route {
    fn borrow(&self) -> &str {
        &self.0
    }
}
