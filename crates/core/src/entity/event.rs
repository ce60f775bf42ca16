//! Roast events
//!
//! An event marks a state change during a roast: charge, first crack, drop.
//! Some events carry a measurement such as the bean temperature at charge.

use crate::value::EventValue;
use serde::{Deserialize, Serialize};

/// A state change recorded during a roast
///
/// Events are keyed by timestamp when removed from a roast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    event_type: String,
    timestamp: i64,
    value: Option<EventValue>,
}

impl Event {
    /// Create an event with no measurement attached
    pub fn new(event_type: impl Into<String>, timestamp: i64) -> Self {
        Self {
            event_type: event_type.into(),
            timestamp,
            value: None,
        }
    }

    /// Create an event that takes ownership of `value`
    pub fn with_value(event_type: impl Into<String>, timestamp: i64, value: EventValue) -> Self {
        Self {
            event_type: event_type.into(),
            timestamp,
            value: Some(value),
        }
    }

    /// Whether a measurement is attached
    #[inline]
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Attached measurement, if any
    #[inline]
    pub fn value(&self) -> Option<&EventValue> {
        self.value.as_ref()
    }

    /// Event timestamp (removal key)
    #[inline]
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Event type tag
    #[inline]
    pub fn event_type(&self) -> &str {
        &self.event_type
    }
}
