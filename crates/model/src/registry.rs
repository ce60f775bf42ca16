//! OwnedRegistry: growable, exclusively-owning store for roast entries
//!
//! ## Design Principles
//!
//! 1. **Ownership on insert**: `add` moves the entry in. From then on the
//!    registry alone decides when it is destroyed.
//!
//! 2. **Doubling growth**: the registry tracks its own logical capacity and
//!    doubles it when full. Capacity never shrinks, not even on removal.
//!
//! 3. **Ordered compaction**: removal shifts every later entry one slot
//!    forward. Relative order of the survivors is preserved (no swap-remove).
//!
//! 4. **Checked reads**: positional access returns `IndexOutOfRange` instead
//!    of reading past the end.
//!
//! ## Identity
//!
//! An entry the registry already owns cannot be handed back to `add`: the
//! registry only ever lends out shared borrows, and `add` needs the value
//! itself. Adding a clone of an owned entry is a separate insertion and is
//! stored as such.

use roasty_core::config::DEFAULT_INITIAL_CAPACITY;
use roasty_core::error::{Result, RoastError};
use roasty_core::{Event, Ingredient};
use std::fmt;
use tracing::{debug, trace};

/// An entry that can live in an [`OwnedRegistry`]
///
/// The key is the domain field used to find the entry for removal.
pub trait RegistryEntry {
    /// Removal key type
    type Key: ?Sized + fmt::Debug;

    /// Entry kind, used in errors and logs
    const KIND: &'static str;

    /// Whether this entry is identified by `key`
    fn matches_key(&self, key: &Self::Key) -> bool;
}

impl RegistryEntry for Event {
    type Key = i64;
    const KIND: &'static str = "event";

    fn matches_key(&self, key: &i64) -> bool {
        self.timestamp() == *key
    }
}

impl RegistryEntry for Ingredient {
    type Key = str;
    const KIND: &'static str = "ingredient";

    fn matches_key(&self, key: &str) -> bool {
        self.bean_name() == key
    }
}

/// Growable store that exclusively owns its entries
///
/// Invariant: `len() <= capacity()`.
#[derive(Debug)]
pub struct OwnedRegistry<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> OwnedRegistry<T> {
    /// Create an empty registry with the default starting capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Create an empty registry with room for `capacity` entries
    ///
    /// A capacity of zero is raised to one so that doubling can make room.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of owned entries
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry owns no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity (slots before the next doubling)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over entries in storage order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: RegistryEntry> OwnedRegistry<T> {
    /// Take ownership of `item` and append it
    ///
    /// Doubles the capacity first if the registry is full. Never fails;
    /// allocation failure aborts.
    pub fn add(&mut self, item: T) {
        if self.items.len() >= self.capacity {
            self.grow();
        }
        self.items.push(item);
        trace!(kind = T::KIND, len = self.items.len(), "added entry");
    }

    fn grow(&mut self) {
        let old_capacity = self.capacity;
        let new_capacity = old_capacity.saturating_mul(2);
        self.items
            .reserve_exact(new_capacity.saturating_sub(self.items.len()));
        self.capacity = new_capacity;
        debug!(
            kind = T::KIND,
            from = old_capacity,
            to = new_capacity,
            "registry capacity doubled"
        );
    }

    /// Remove and return the first entry whose key equals `key`
    ///
    /// Later entries shift one slot forward. Returns `None` and leaves the
    /// registry untouched if nothing matches. Only the first match is
    /// removed per call.
    pub fn remove_by_key(&mut self, key: &T::Key) -> Option<T> {
        let Some(index) = self.items.iter().position(|item| item.matches_key(key)) else {
            debug!(kind = T::KIND, ?key, "no entry matched removal key");
            return None;
        };

        let removed = self.items.remove(index);
        trace!(
            kind = T::KIND,
            ?key,
            index,
            len = self.items.len(),
            "removed entry"
        );
        Some(removed)
    }

    /// Borrow the entry at `index`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.items
            .get(index)
            .ok_or_else(|| RoastError::index_out_of_range(T::KIND, index, self.items.len()))
    }
}

impl<T> Default for OwnedRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for OwnedRegistry<T> {
    /// Deep-clone every entry into fresh storage of the same capacity
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend(self.items.iter().cloned());
        Self {
            items,
            capacity: self.capacity,
        }
    }

    /// Drop every owned entry, then deep-clone `source`'s entries
    ///
    /// Keeps the larger of the two capacities so capacity never shrinks.
    fn clone_from(&mut self, source: &Self) {
        self.items.clear();
        let capacity = self.capacity.max(source.capacity);
        self.items.reserve_exact(capacity);
        self.items.extend(source.items.iter().cloned());
        self.capacity = capacity;
    }
}

// Equality is over the owned entries; capacity is a sizing detail.
impl<T: PartialEq> PartialEq for OwnedRegistry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for OwnedRegistry<T> {}

impl<'a, T> IntoIterator for &'a OwnedRegistry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
