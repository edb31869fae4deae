//! Context error types

use thiserror::Error;

/// Result type for context operations
pub type Result<T> = std::result::Result<T, ContextError>;

/// Failures of the context store itself
///
/// Validation steps never produce these; they only pass them through.
#[derive(Debug, Error)]
pub enum ContextError {
    /// The store refused to read a key
    #[error("failed to read context key '{key}': {message}")]
    Read {
        /// Key being read
        key: String,
        /// Store-specific reason
        message: String,
    },

    /// The store refused to write a key
    #[error("failed to write context key '{key}': {message}")]
    Write {
        /// Key being written
        key: String,
        /// Store-specific reason
        message: String,
    },

    /// The store is read-only for this phase of the request
    #[error("context is read-only, cannot write '{key}'")]
    ReadOnly {
        /// Key being written
        key: String,
    },
}

impl ContextError {
    /// Create a Read error
    pub fn read(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Read {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a Write error
    pub fn write(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Write {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a ReadOnly error
    pub fn read_only(key: impl Into<String>) -> Self {
        Self::ReadOnly { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error() {
        let err = ContextError::read("request.path", "store closed");
        assert!(err.to_string().contains("request.path"));
        assert!(err.to_string().contains("store closed"));
    }

    #[test]
    fn test_write_error() {
        let err = ContextError::write("isValidCode", "quota exceeded");
        assert!(err.to_string().contains("isValidCode"));
        assert!(err.to_string().contains("failed to write"));
    }

    #[test]
    fn test_read_only_error() {
        let err = ContextError::read_only("errorType");
        assert!(err.to_string().contains("errorType"));
        assert!(err.to_string().contains("read-only"));
    }
}
