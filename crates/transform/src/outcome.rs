//! Validation outcomes

use std::fmt;

use serde::Serialize;

/// Why an outcome came out the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// The value is in the route's code set
    Accepted,
    /// The route has a rule, the value is not in its code set
    InvalidCode,
    /// No rule for the route
    UnknownRoute,
}

impl OutcomeKind {
    /// Name written to the context's reason key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::InvalidCode => "invalid_code",
            Self::UnknownRoute => "unknown_route",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating one value against the rule table
///
/// `error_classification` is present exactly when the value was rejected
/// by a matching rule. An unknown route is invalid without a
/// classification; `kind` tells the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_classification: Option<String>,
    kind: OutcomeKind,
}

impl ValidationOutcome {
    /// Value accepted by its route's rule
    pub fn accepted() -> Self {
        Self {
            is_valid: true,
            error_classification: None,
            kind: OutcomeKind::Accepted,
        }
    }

    /// Value rejected by its route's rule
    pub fn invalid_code(classification: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_classification: Some(classification.into()),
            kind: OutcomeKind::InvalidCode,
        }
    }

    /// No rule for the route
    pub fn unknown_route() -> Self {
        Self {
            is_valid: false,
            error_classification: None,
            kind: OutcomeKind::UnknownRoute,
        }
    }

    /// Whether the value passed
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Error label of the rejecting rule, if any
    #[inline]
    pub fn error_classification(&self) -> Option<&str> {
        self.error_classification.as_deref()
    }

    /// Why the outcome was reached
    #[inline]
    pub fn kind(&self) -> OutcomeKind {
        self.kind
    }
}
