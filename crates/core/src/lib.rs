//! Core types for Roasty
//!
//! This crate defines the foundational types used by the roast model:
//! - Value types: Bean, EventValue
//! - Owned entities: Ingredient, Event
//! - Error: RoastError and the crate-wide Result alias
//! - Config: RoastConfig loaded from `roasty.toml`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod entity;
pub mod error;
pub mod value;

pub use config::{RoastConfig, CONFIG_FILE_NAME, DEFAULT_INITIAL_CAPACITY};
pub use entity::{Event, Ingredient};
pub use error::{Result, RoastError};
pub use value::{Bean, EventValue};
