//! The cart: an ordered, id-unique collection of line items.
//!
//! # Invariants
//!
//! - No two entries share an [`ItemId`]. Every mutating method preserves
//!   this, including [`Cart::insert`], which merges instead of duplicating.
//! - Insertion order is preserved; new items append at the end.
//!
//! Carts are small (a shopper's basket, not a warehouse), so every lookup
//! is a linear scan. No index is kept.
//!
//! A `Cart` has no identity beyond one request-response cycle: it is
//! materialized from cookie bytes, mutated in memory, and immediately
//! re-serialized.

use serde::{Deserialize, Serialize};

use crate::types::{ItemId, LineItem};

/// The client-held collection of line items for one shopper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// All line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line item quantities (saturating).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Look up a line item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether the cart holds an entry with the given id.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Add `quantity` units to an existing entry.
    ///
    /// Returns `true` if an entry with `id` was found and incremented,
    /// `false` if the cart has no such entry (the caller then fetches the
    /// item from the catalog and calls [`Cart::insert`]). The addition
    /// saturates at `u32::MAX`.
    pub fn increment(&mut self, id: ItemId, quantity: u32) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(quantity);
                true
            }
            None => false,
        }
    }

    /// Append a new line item.
    ///
    /// If an entry with the same id already exists, its quantity is merged
    /// instead (the existing snapshot wins; display fields are not
    /// refreshed). This keeps the id-uniqueness invariant in one place.
    pub fn insert(&mut self, item: LineItem) {
        if self.increment(item.id, item.quantity) {
            return;
        }
        self.items.push(item);
    }

    /// Overwrite the quantity of an existing entry unconditionally.
    ///
    /// Returns `false` (silent no-op) when the id is not in the cart.
    /// Zero is accepted; `remove` is the supported way to drop a line.
    pub fn set_quantity(&mut self, id: ItemId, quantity: u32) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove the entry with the given id.
    ///
    /// Returns `false` (silent no-op) when the id is not in the cart.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }
}

impl FromIterator<LineItem> for Cart {
    fn from_iter<I: IntoIterator<Item = LineItem>>(iter: I) -> Self {
        let mut cart = Self::new();
        for item in iter {
            cart.insert(item);
        }
        cart
    }
}
