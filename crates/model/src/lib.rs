//! Roast model for Roasty
//!
//! Provides the owning collection and the aggregate built on it:
//! - **OwnedRegistry**: growable store that owns its entries, doubles when
//!   full, removes by key with ordered compaction, and checks positional reads
//! - **Roast**: one roasting session, owning an event registry and an
//!   ingredient registry
//!
//! ## Ownership
//!
//! Everything is single-owner and single-threaded. A roast owns its
//! registries, a registry owns its entries, and each entry owns its nested
//! value. Dropping a roast releases all of it exactly once.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod registry;
pub mod roast;

pub use registry::{OwnedRegistry, RegistryEntry};
pub use roast::Roast;
