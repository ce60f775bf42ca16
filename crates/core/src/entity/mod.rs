//! Entries owned by a roast
//!
//! Each entity exclusively owns one nested value:
//! - [`Ingredient`] owns a [`Bean`](crate::value::Bean)
//! - [`Event`] owns an optional [`EventValue`](crate::value::EventValue)
//!
//! Cloning an entity deep-clones the nested value, so two copies never share
//! it.

pub mod event;
pub mod ingredient;

pub use event::Event;
pub use ingredient::Ingredient;
