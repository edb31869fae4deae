//! Gatecheck - Context
//!
//! Typed access to the per-request key-value store that gateway steps
//! share. Steps never reach for an ambient "current request"; they take a
//! `&dyn Context` (read) or `&mut dyn Context` (read/write) parameter.
//!
//! # Example
//!
//! ```
//! use gatecheck_context::{Context, MemoryContext, Value};
//!
//! let mut ctx = MemoryContext::new();
//! ctx.set("payload.historic", Value::from("20")).unwrap();
//!
//! let historic = ctx.get_text("payload.historic").unwrap();
//! assert_eq!(historic.as_deref(), Some("20"));
//! ```

mod error;
mod memory;
mod value;

pub use error::{ContextError, Result};
pub use memory::MemoryContext;
pub use value::Value;

/// Read/write façade over the per-request context store
///
/// Implementations wrap whatever the surrounding gateway provides. Errors
/// are reserved for failures of the store itself; a missing key is
/// `Ok(None)`.
pub trait Context {
    /// Read a value; `None` when the key is not set
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Read a value rendered as text
    ///
    /// Numbers and booleans are rendered the way the gateway would print
    /// them. `Null` reads as absent.
    fn get_text(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key)?.and_then(|v| v.as_text()))
    }
}

impl<C: Context + ?Sized> Context for &mut C {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        (**self).set(key, value)
    }
}
