//! Plain value types carried by roast entries
//!
//! Both types are immutable once built: there are no setters, and copying
//! one is a plain value copy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A coffee bean, identified by name
///
/// The name is the lookup key when removing ingredients from a roast.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bean {
    name: String,
}

impl Bean {
    /// Create a bean with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Bean name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Bean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Measurement attached to an event (e.g. a temperature reading)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventValue(i32);

impl EventValue {
    /// Wrap a raw reading
    #[inline]
    pub const fn new(value: i32) -> Self {
        EventValue(value)
    }

    /// Raw reading
    #[inline]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for EventValue {
    fn from(value: i32) -> Self {
        EventValue(value)
    }
}
