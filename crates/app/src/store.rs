//! Cart store.
//!
//! The stateful face of the cart: rehydrates from durable storage when
//! opened and writes the full cart back after every effective mutation, so
//! an interrupted session resumes where it left off.

use mesa::{
    cart::Cart,
    items::{LineItem, LineItemId},
};

use crate::storage::{CartStorage, StorageError};

/// A cart bound to its durable storage.
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    storage: CartStorage,
}

impl CartStore {
    /// Open the store, rehydrating any previously persisted cart.
    #[must_use]
    pub fn open(storage: CartStorage) -> Self {
        Self {
            cart: storage.load(),
            storage,
        }
    }

    /// The current cart state.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add a configured line item (merging by identity) and persist.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the cart cannot be persisted.
    pub fn add(&mut self, candidate: LineItem) -> Result<(), StorageError> {
        self.cart.add(candidate);
        self.storage.save(&self.cart)
    }

    /// Apply a quantity delta and persist when anything changed.
    ///
    /// Returns whether the cart changed; the quantity floor and unknown-id
    /// no-ops of [`Cart::update_quantity`] skip the write entirely.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the cart cannot be persisted.
    pub fn update_quantity(&mut self, id: &LineItemId, delta: i32) -> Result<bool, StorageError> {
        if !self.cart.update_quantity(id, delta) {
            return Ok(false);
        }

        self.storage.save(&self.cart)?;

        Ok(true)
    }

    /// Remove a line item and persist when anything changed.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the cart cannot be persisted.
    pub fn remove_item(&mut self, id: &LineItemId) -> Result<bool, StorageError> {
        if !self.cart.remove(id) {
            return Ok(false);
        }

        self.storage.save(&self.cart)?;

        Ok(true)
    }

    /// Empty the cart and remove the persisted record.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the record cannot be removed.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.cart.clear();
        self.storage.remove()
    }
}

#[cfg(test)]
mod tests {
    use mesa::{
        catalog::{ExtraOption, Product, SizeOption},
        items::ConfigureError,
    };
    use testresult::TestResult;

    use super::*;

    fn sahlab() -> Product {
        Product {
            id: "sahlab-nuts".to_string(),
            name: "Nuts Sahlab".to_string(),
            image: None,
            sizes: vec![SizeOption {
                name: "Regular".to_string(),
                price: 17_00,
            }],
            extras: vec![ExtraOption {
                name: "Add Honey".to_string(),
                price: 2_00,
            }],
        }
    }

    fn item(quantity: u32) -> Result<LineItem, ConfigureError> {
        LineItem::configure(&sahlab(), "Regular", &[], quantity, None)
    }

    #[test]
    fn mutations_persist_across_reopen() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = CartStorage::new(dir.path().join("cart.json"));

        let mut store = CartStore::open(storage.clone());
        store.add(item(2)?)?;

        let reopened = CartStore::open(storage);

        assert_eq!(reopened.cart(), store.cart());
        assert_eq!(reopened.cart().subtotal(), 34_00);

        Ok(())
    }

    #[test]
    fn no_op_mutations_skip_the_write() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = CartStorage::new(dir.path().join("cart.json"));

        let mut store = CartStore::open(storage.clone());
        store.add(item(1)?)?;

        let unknown = LineItemId::derive("sahlab-nuts", "Large", &[]);

        assert!(!store.update_quantity(&unknown, 1)?, "unknown id must no-op");
        assert!(!store.remove_item(&unknown)?, "unknown id must no-op");

        let id = LineItemId::derive("sahlab-nuts", "Regular", &[]);

        assert!(!store.update_quantity(&id, -1)?, "quantity floor must no-op");
        assert_eq!(storage.load(), *store.cart());

        Ok(())
    }

    #[test]
    fn clear_removes_the_persisted_record() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("cart.json");

        let mut store = CartStore::open(CartStorage::new(&path));
        store.add(item(1)?)?;

        assert!(path.exists(), "add should persist the cart");

        store.clear()?;

        assert!(store.cart().is_empty());
        assert_eq!(store.cart().subtotal(), 0);
        assert!(!path.exists(), "clear should remove the record");

        Ok(())
    }

    #[test]
    fn update_and_remove_write_through() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = CartStorage::new(dir.path().join("cart.json"));

        let mut store = CartStore::open(storage.clone());
        store.add(item(1)?)?;

        let id = LineItemId::derive("sahlab-nuts", "Regular", &[]);

        assert!(store.update_quantity(&id, 2)?, "increment should change");
        assert_eq!(storage.load().subtotal(), 51_00);

        assert!(store.remove_item(&id)?, "removal should change");
        assert!(storage.load().is_empty());

        Ok(())
    }
}
