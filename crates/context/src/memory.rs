//! In-memory context store
//!
//! Backs unit tests and the CLI. A real gateway supplies its own
//! `Context` implementation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{Context, Result, Value};

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;

/// `Context` backed by an ordered map
///
/// Ordered so that dumps (CLI output, test snapshots) are stable.
/// Serializes as a plain key → value map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MemoryContext {
    values: BTreeMap<String, Value>,
}

impl MemoryContext {
    /// Create an empty context
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for seeding test fixtures
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Remove a key, returning its previous value
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// Check whether a key is set
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of keys set
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no keys are set
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Borrow the underlying map (for serialization)
    #[inline]
    pub fn as_map(&self) -> &BTreeMap<String, Value> {
        &self.values
    }
}

impl Context for MemoryContext {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for MemoryContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
