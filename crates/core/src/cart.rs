//! Cart
//!
//! The in-progress order: an ordered collection of line items with
//! identity-based merging and total bookkeeping. Insertion order is display
//! order. The cart itself is pure state; durable persistence and submission
//! live in the application layer.

use serde::{Deserialize, Serialize};

use crate::items::{LineItem, LineItemId};

/// The in-progress order.
///
/// Serialises as `{ "items": [...] }`, the shape persisted to durable
/// client storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a configured line item, merging with an existing item of the same
    /// identity.
    ///
    /// On a merge the quantities are summed and the line total is recomputed
    /// from the existing item's unit-price snapshot; a diverging unit price
    /// on the candidate is ignored. Otherwise the candidate is appended,
    /// preserving insertion order.
    pub fn add(&mut self, candidate: LineItem) {
        if let Some(existing) = self.items.iter_mut().find(|item| item.id == candidate.id) {
            existing.quantity += candidate.quantity;
            existing.total_price = existing.price_per_item * u64::from(existing.quantity);
        } else {
            self.items.push(candidate);
        }
    }

    /// Apply a quantity delta to the matching line item.
    ///
    /// Returns whether anything changed. A delta that would take the
    /// quantity to zero or below is a no-op, as is an unknown id or an empty
    /// cart. On change the line total is recomputed from the unit price.
    pub fn update_quantity(&mut self, id: &LineItemId, delta: i32) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == *id) else {
            return false;
        };

        let updated = i64::from(item.quantity) + i64::from(delta);

        let Ok(quantity) = u32::try_from(updated) else {
            return false;
        };

        if quantity == 0 || quantity == item.quantity {
            return false;
        }

        item.quantity = quantity;
        item.total_price = item.price_per_item * u64::from(quantity);

        true
    }

    /// Remove the matching line item.
    ///
    /// Returns whether anything was removed; an unknown id is a no-op.
    pub fn remove(&mut self, id: &LineItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != *id);

        self.items.len() != before
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total of all line items, in minor units. Zero for an empty cart.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.items.iter().map(|item| item.total_price).sum()
    }

    /// Get a line item by id.
    #[must_use]
    pub fn get(&self, id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Iterate over the line items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    /// Number of line items (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
