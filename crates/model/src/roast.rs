//! Roast: one roasting session and everything it owns
//!
//! A roast owns two registries, one of events and one of ingredients. Every
//! mutation goes through them; id and start time are fixed at construction.

use crate::registry::OwnedRegistry;
use roasty_core::config::RoastConfig;
use roasty_core::error::Result;
use roasty_core::{Event, Ingredient};
use tracing::trace;

/// A roasting session
///
/// # Example
///
/// ```
/// use roasty_model::Roast;
/// use roasty_core::{Event, EventValue};
///
/// let mut roast = Roast::new(7, 1_000);
/// roast.add_event(Event::with_value("CHARGE", 1_000, EventValue::new(350)));
/// roast.add_event(Event::new("DROP", 2_000));
///
/// let dropped = roast.remove_event_by_timestamp(2_000);
/// assert!(dropped.is_some());
/// assert_eq!(roast.event_count(), 1);
/// ```
#[derive(Debug, PartialEq)]
pub struct Roast {
    id: i64,
    start_timestamp: i64,
    events: OwnedRegistry<Event>,
    ingredients: OwnedRegistry<Ingredient>,
    config: RoastConfig,
}

impl Roast {
    /// Create an empty roast with the default config
    pub fn new(id: i64, start_timestamp: i64) -> Self {
        Self::with_config(id, start_timestamp, RoastConfig::default())
    }

    /// Create an empty roast whose registries start at
    /// `config.initial_capacity`
    pub fn with_config(id: i64, start_timestamp: i64, config: RoastConfig) -> Self {
        trace!(id, start_timestamp, ?config, "created roast");
        Self {
            id,
            start_timestamp,
            events: OwnedRegistry::with_capacity(config.initial_capacity),
            ingredients: OwnedRegistry::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// Roast identifier
    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Time the roast began
    #[inline]
    pub fn start_timestamp(&self) -> i64 {
        self.start_timestamp
    }

    /// Config the roast was built with
    pub fn config(&self) -> &RoastConfig {
        &self.config
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Take ownership of `event`
    pub fn add_event(&mut self, event: Event) {
        self.events.add(event);
    }

    /// Remove and return the first event recorded at `timestamp`
    pub fn remove_event_by_timestamp(&mut self, timestamp: i64) -> Option<Event> {
        self.events.remove_by_key(&timestamp)
    }

    /// Borrow the event at `index`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= event_count()`.
    pub fn event(&self, index: usize) -> Result<&Event> {
        self.events.get(index)
    }

    /// Number of owned events
    #[inline]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Read view of the event registry
    pub fn events(&self) -> &OwnedRegistry<Event> {
        &self.events
    }

    // =========================================================================
    // Ingredients
    // =========================================================================

    /// Take ownership of `ingredient` without checking its amount
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.add(ingredient);
    }

    /// Take ownership of `ingredient` after checking its amount against the
    /// roast's config
    ///
    /// # Errors
    ///
    /// Returns `NegativeAmount` if the config disallows negative amounts and
    /// the amount is below zero. The ingredient is dropped in that case.
    pub fn try_add_ingredient(&mut self, ingredient: Ingredient) -> Result<()> {
        ingredient.validate_amount(&self.config)?;
        self.ingredients.add(ingredient);
        Ok(())
    }

    /// Remove and return the first ingredient using the bean named
    /// `bean_name`
    pub fn remove_ingredient_by_bean_name(&mut self, bean_name: &str) -> Option<Ingredient> {
        self.ingredients.remove_by_key(bean_name)
    }

    /// Borrow the ingredient at `index`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= ingredient_count()`.
    pub fn ingredient(&self, index: usize) -> Result<&Ingredient> {
        self.ingredients.get(index)
    }

    /// Number of owned ingredients
    #[inline]
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    /// Read view of the ingredient registry
    pub fn ingredients(&self) -> &OwnedRegistry<Ingredient> {
        &self.ingredients
    }
}

impl Clone for Roast {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            start_timestamp: self.start_timestamp,
            events: self.events.clone(),
            ingredients: self.ingredients.clone(),
            config: self.config.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.id = source.id;
        self.start_timestamp = source.start_timestamp;
        self.events.clone_from(&source.events);
        self.ingredients.clone_from(&source.ingredients);
        self.config.clone_from(&source.config);
    }
}
