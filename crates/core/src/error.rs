//! Error types for the roast model
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! The taxonomy is deliberately narrow: removing an entry whose key is absent
//! is not an error, and allocation failure aborts the process.

use std::io;
use thiserror::Error;

/// Result type alias for roast operations
pub type Result<T> = std::result::Result<T, RoastError>;

/// Error types for the roast model
#[derive(Debug, Error)]
pub enum RoastError {
    /// Positional read past the end of a registry
    #[error("{kind} index out of range: index {index}, length {len}")]
    IndexOutOfRange {
        /// Entry kind ("event" or "ingredient")
        kind: &'static str,
        /// Requested index
        index: usize,
        /// Number of entries at the time of the call
        len: usize,
    },

    /// Ingredient amount rejected by the active configuration
    #[error("Negative amount {amount} for bean '{bean}'")]
    NegativeAmount {
        /// Bean name of the rejected ingredient
        bean: String,
        /// Offending amount
        amount: i32,
    },

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (config file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl RoastError {
    /// Build an out-of-range error for the given entry kind
    pub fn index_out_of_range(kind: &'static str, index: usize, len: usize) -> Self {
        RoastError::IndexOutOfRange { kind, index, len }
    }

    /// Build a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        RoastError::Config(msg.into())
    }
}

impl From<toml::de::Error> for RoastError {
    fn from(e: toml::de::Error) -> Self {
        RoastError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for RoastError {
    fn from(e: toml::ser::Error) -> Self {
        RoastError::Config(e.to_string())
    }
}
