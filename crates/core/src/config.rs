//! Roast configuration via `roasty.toml`
//!
//! Settings are read once when a roast is built. To change them, edit the
//! file and rebuild the roast; a running roast keeps the config it was
//! created with.

use crate::error::{Result, RoastError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "roasty.toml";

/// Default number of slots a fresh registry reserves.
///
/// A roast goes through six events in the common case (charge, turning
/// point, dry end, first crack, second crack, drop).
pub const DEFAULT_INITIAL_CAPACITY: usize = 6;

/// Roast configuration loaded from `roasty.toml`.
///
/// # Example
///
/// ```toml
/// initial_capacity = 6
/// allow_negative_amounts = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoastConfig {
    /// Starting capacity of the event and ingredient registries.
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
    /// Whether `try_add_ingredient` accepts negative amounts.
    #[serde(default = "default_allow_negative_amounts")]
    pub allow_negative_amounts: bool,
}

fn default_initial_capacity() -> usize {
    DEFAULT_INITIAL_CAPACITY
}

fn default_allow_negative_amounts() -> bool {
    true
}

impl Default for RoastConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
            allow_negative_amounts: default_allow_negative_amounts(),
        }
    }
}

impl RoastConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting registry capacity
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set whether negative ingredient amounts are accepted
    pub fn with_allow_negative_amounts(mut self, allow: bool) -> Self {
        self.allow_negative_amounts = allow;
        self
    }

    /// Check the config for values no registry can work with.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_capacity` is zero (doubling would never
    /// make room).
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(RoastError::config(
                "initial_capacity must be at least 1 in roasty.toml",
            ));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Roasty configuration
#
# Starting capacity of the event and ingredient registries (default: 6).
# Registries double when full, so this is a sizing hint, not a limit.
initial_capacity = 6

# Accept ingredients with a negative amount in try_add_ingredient
# (default: true). add_ingredient never validates.
allow_negative_amounts = true
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RoastConfig = toml::from_str(&content).map_err(|e| {
            RoastError::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        debug!(path = %path.display(), ?config, "loaded roast config");
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
            debug!(path = %path.display(), "wrote default roast config");
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
