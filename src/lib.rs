//! Roasty - coffee roast session log
//!
//! A [`Roast`] records the events of a roasting session (charge, first crack,
//! drop, ...) and the ingredients that went into it. The roast exclusively
//! owns every entry through two [`OwnedRegistry`] instances.
//!
//! # Quick Start
//!
//! ```
//! use roasty::{Bean, Event, EventValue, Ingredient, Roast};
//!
//! let mut roast = Roast::new(1, 1_000);
//! roast.add_event(Event::with_value("CHARGE", 1_000, EventValue::new(350)));
//! roast.add_ingredient(Ingredient::new(Bean::new("Yirgacheffe"), 250));
//!
//! assert_eq!(roast.event_count(), 1);
//! assert_eq!(roast.ingredient(0)?.bean_name(), "Yirgacheffe");
//! # Ok::<(), roasty::RoastError>(())
//! ```
//!
//! # Architecture
//!
//! - `roasty-core`: value types, owned entities, errors and configuration
//! - `roasty-model`: the owned registry and the `Roast` aggregate

pub use roasty_core::*;
pub use roasty_model::*;
