//! Durable cart persistence.
//!
//! One JSON file holds the whole cart, the local-storage analog of the
//! storefront. Loading never fails: a missing file is an empty cart, and a
//! corrupted record is discarded so the session starts clean.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::warn;

use mesa::cart::Cart;

/// Errors that can occur while persisting the cart.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The cart could not be encoded as JSON.
    #[error("failed to encode cart: {0}")]
    Encode(#[from] serde_json::Error),

    /// The cart file could not be written.
    #[error("failed to write saved cart: {0}")]
    Write(#[source] io::Error),

    /// The cart file could not be removed.
    #[error("failed to remove saved cart: {0}")]
    Remove(#[source] io::Error),
}

/// File-backed persistence for a single cart.
#[derive(Debug, Clone)]
pub struct CartStorage {
    path: PathBuf,
}

impl CartStorage {
    /// Create storage over the given cart file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the cart file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted cart.
    ///
    /// A missing file yields an empty cart. An unreadable or malformed
    /// record is discarded (the file is removed) and an empty cart is
    /// returned; corruption is never surfaced to the caller.
    #[must_use]
    pub fn load(&self) -> Cart {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Cart::new(),
            Err(error) => {
                warn!(%error, path = %self.path.display(), "failed to read saved cart; starting empty");
                return Cart::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cart) => cart,
            Err(error) => {
                warn!(%error, path = %self.path.display(), "discarding corrupted saved cart");
                let _removed = fs::remove_file(&self.path);
                Cart::new()
            }
        }
    }

    /// Persist the full cart, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when encoding or writing fails.
    pub fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(StorageError::Write)?;
        }

        let blob = serde_json::to_string(cart)?;

        fs::write(&self.path, blob).map_err(StorageError::Write)
    }

    /// Remove the persisted record. Removing an absent record is fine.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError::Remove`] on any other filesystem failure.
    pub fn remove(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(StorageError::Remove(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use mesa::{
        catalog::{Product, SizeOption},
        items::{ConfigureError, LineItem},
    };
    use testresult::TestResult;

    use super::*;

    fn sample_cart() -> Result<Cart, ConfigureError> {
        let product = Product {
            id: "mojito-classic".to_string(),
            name: "Classic Mojito".to_string(),
            image: None,
            sizes: vec![SizeOption {
                name: "Regular".to_string(),
                price: 20_00,
            }],
            extras: vec![],
        };

        let mut cart = Cart::new();
        cart.add(LineItem::configure(&product, "Regular", &[], 2, None)?);

        Ok(cart)
    }

    #[test]
    fn missing_file_loads_an_empty_cart() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = CartStorage::new(dir.path().join("cart.json"));

        assert!(storage.load().is_empty());

        Ok(())
    }

    #[test]
    fn save_then_load_round_trips() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = CartStorage::new(dir.path().join("cart.json"));
        let cart = sample_cart()?;

        storage.save(&cart)?;

        assert_eq!(storage.load(), cart);

        Ok(())
    }

    #[test]
    fn corrupted_record_is_discarded() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("cart.json");
        std::fs::write(&path, "{ not json")?;

        let storage = CartStorage::new(&path);

        assert!(storage.load().is_empty());
        assert!(!path.exists(), "corrupted file should be removed");

        Ok(())
    }

    #[test]
    fn wrong_shape_is_discarded_like_corruption() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("cart.json");
        std::fs::write(&path, r#"{ "items": "not-a-list" }"#)?;

        let storage = CartStorage::new(&path);

        assert!(storage.load().is_empty());
        assert!(!path.exists(), "mis-shaped file should be removed");

        Ok(())
    }

    #[test]
    fn remove_is_idempotent() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = CartStorage::new(dir.path().join("cart.json"));
        let cart = sample_cart()?;

        storage.save(&cart)?;
        storage.remove()?;
        storage.remove()?;

        assert!(storage.load().is_empty());

        Ok(())
    }
}
