//! Rule entries

use std::fmt;

use crate::Route;

/// How tokens of a code set (and the value checked against it) are
/// normalized before comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodeKind {
    /// Leading-integer coercion; `"20"`, `" 20"` and `"20x"` compare equal
    #[default]
    Integer,
    /// Trimmed string comparison
    Text,
}

impl CodeKind {
    /// Config/display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation rule
///
/// Binds a route to the context key holding its accepted codes and to the
/// error classification reported when a value is not among them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    route: Route,
    codes_key: String,
    error_classification: String,
    kind: CodeKind,
}

impl RuleEntry {
    /// Create an integer-coded rule
    pub fn new(
        route: impl Into<Route>,
        codes_key: impl Into<String>,
        error_classification: impl Into<String>,
    ) -> Self {
        Self {
            route: route.into(),
            codes_key: codes_key.into(),
            error_classification: error_classification.into(),
            kind: CodeKind::Integer,
        }
    }

    /// Set the code kind
    #[must_use]
    pub fn with_kind(mut self, kind: CodeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Route this rule applies to
    #[inline]
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Context key holding the comma-separated accepted codes
    #[inline]
    pub fn codes_key(&self) -> &str {
        &self.codes_key
    }

    /// Label reported when the check fails
    #[inline]
    pub fn error_classification(&self) -> &str {
        &self.error_classification
    }

    /// Normalization applied to codes and values
    #[inline]
    pub fn kind(&self) -> CodeKind {
        self.kind
    }
}
