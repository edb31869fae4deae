//! Code sets
//!
//! A code set is the list of accepted values for a rule, configured as a
//! single comma-separated string (e.g. `"10,20,30"`).
//!
//! # Normalization Policy
//!
//! Tokens and checked values go through the same normalization, chosen by
//! the rule's `CodeKind`:
//!
//! | Kind | Input | Normalized |
//! |------|-------|------------|
//! | `Integer` | `"20"`, `" 20 "`, `"+20"` | `20` |
//! | `Integer` | `"20abc"`, `"20.5"` | `20` (leading digits win) |
//! | `Integer` | `"0x14"` | `20` (hex prefix) |
//! | `Integer` | `""`, `"abc"`, `"-"`, `"0x"` | dropped |
//! | `Text` | `" LOST "` | `"LOST"` |
//! | `Text` | `""`, `"  "` | dropped |
//!
//! Dropped tokens never match anything. Parsing never fails: a string
//! with no usable tokens is an empty set.

use std::fmt;

use gatecheck_routing::CodeKind;

#[cfg(test)]
#[path = "codes_test.rs"]
mod tests;

/// A normalized, comparable code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Code {
    /// Integer code
    Int(i64),
    /// Text code (trimmed, non-empty)
    Text(String),
}

impl Code {
    /// Normalize a raw token
    ///
    /// Returns `None` when the token has no usable value for `kind`.
    pub fn normalize(raw: &str, kind: CodeKind) -> Option<Self> {
        let trimmed = raw.trim();
        match kind {
            CodeKind::Integer => parse_leading_int(trimmed).map(Self::Int),
            CodeKind::Text if trimmed.is_empty() => None,
            CodeKind::Text => Some(Self::Text(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Parse an optional sign followed by leading digits
///
/// A `0x`/`0X` prefix switches to hex digits. Anything after the digits is
/// ignored. A prefix with no digits after it, or an out-of-range value, is
/// `None`.
fn parse_leading_int(s: &str) -> Option<i64> {
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for c in digits[..end].chars() {
        let digit = i64::from(c.to_digit(radix)?);
        value = value.checked_mul(i64::from(radix))?;
        value = if negative {
            value.checked_sub(digit)?
        } else {
            value.checked_add(digit)?
        };
    }

    Some(value)
}

/// Ordered list of accepted codes
///
/// Keeps source order and duplicates; membership is a linear scan, which
/// is what a handful of configured codes calls for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeSet {
    codes: Vec<Code>,
}

impl CodeSet {
    /// Create an empty code set
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a comma-separated string
    ///
    /// Malformed tokens are dropped; the rest are kept in order.
    pub fn parse(raw: &str, kind: CodeKind) -> Self {
        let codes = raw
            .split(',')
            .filter_map(|token| {
                let code = Code::normalize(token, kind);
                if code.is_none() && !token.trim().is_empty() {
                    tracing::trace!(token, %kind, "dropping malformed code");
                }
                code
            })
            .collect();

        Self { codes }
    }

    /// Check whether a normalized code is accepted
    #[inline]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.contains(code)
    }

    /// Normalize a raw value and check whether it is accepted
    ///
    /// A value that fails normalization is never accepted.
    pub fn accepts(&self, raw: &str, kind: CodeKind) -> bool {
        Code::normalize(raw, kind).is_some_and(|code| self.contains(&code))
    }

    /// Serialize back to the comma-separated form
    ///
    /// Parsing the result with the same kind yields an equal set.
    pub fn to_raw(&self) -> String {
        self.codes
            .iter()
            .map(Code::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Number of codes (duplicates included)
    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if no codes were parsed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over the codes in source order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Code> {
        self.codes.iter()
    }
}

impl fmt::Display for CodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_raw())
    }
}
