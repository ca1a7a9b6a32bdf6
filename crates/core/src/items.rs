//! Line items
//!
//! A line item is one uniquely configured product in the cart: the product
//! plus its variant configuration (size and extras), a quantity, and price
//! snapshots taken at add time. Two additions with the same configuration
//! collapse into one line item; the [`LineItemId`] derived from the
//! configuration is what makes them recognisably "the same".

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    catalog::Product,
    pricing::{PricingError, unit_price},
};

/// Errors that can occur while configuring a line item.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigureError {
    /// The requested size or extra is not offered by the product.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// A line item always represents at least one unit.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

/// Identity of a line item, derived from its variant configuration.
///
/// Extras are sorted lexicographically before concatenation, so selecting
/// the same extras in a different order yields the same identity. Size is
/// compared as an exact string, with no normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(String);

impl LineItemId {
    /// Derive the identity for a product configured with a size and extras.
    ///
    /// Deterministic and total: any `(product_id, size, extras)` triple maps
    /// to exactly one identity string.
    #[must_use]
    pub fn derive(product_id: &str, size: &str, extras: &[String]) -> Self {
        let mut sorted: SmallVec<[&str; 4]> = extras.iter().map(String::as_str).collect();
        sorted.sort_unstable();

        Self(format!("{product_id}_{size}_{}", sorted.join("_")))
    }

    /// The identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for LineItemId {
    /// Wrap an identity string handed back by an earlier [`LineItemId::derive`].
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry in the cart: a configured product and its quantity.
///
/// `name` and `image` are display snapshots copied at add time; they are not
/// live-synced to later catalog changes. The identity string is never parsed
/// back apart; `product_id` carries the raw catalog id for the submission
/// payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Derived identity of this configuration within the cart.
    pub id: LineItemId,

    /// Catalog id of the underlying product.
    pub product_id: String,

    /// Display name snapshot.
    pub name: String,

    /// Display image snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Selected size label.
    pub size: String,

    /// Selected extras, in selection order. Identity ignores the order.
    #[serde(default)]
    pub extras: SmallVec<[String; 4]>,

    /// Free-text instructions carried with the item; not part of identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,

    /// Number of units. Always at least 1.
    pub quantity: u32,

    /// Per-unit price snapshot at add time, in minor units.
    pub price_per_item: u64,

    /// Line total. Invariant: `price_per_item * quantity`.
    pub total_price: u64,
}

impl LineItem {
    /// Build a line item from a catalog product and a variant configuration.
    ///
    /// The unit price is snapshotted here (size price plus selected extras)
    /// and the line total starts out as `unit price * quantity`.
    ///
    /// # Errors
    ///
    /// - [`ConfigureError::Pricing`]: the size or an extra is not offered by the product.
    /// - [`ConfigureError::ZeroQuantity`]: `quantity` is zero.
    pub fn configure(
        product: &Product,
        size: &str,
        extras: &[String],
        quantity: u32,
        special_instructions: Option<String>,
    ) -> Result<Self, ConfigureError> {
        if quantity == 0 {
            return Err(ConfigureError::ZeroQuantity);
        }

        let price_per_item = unit_price(product, size, extras)?;

        Ok(Self {
            id: LineItemId::derive(&product.id, size, extras),
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            size: size.to_string(),
            extras: extras.iter().cloned().collect(),
            special_instructions,
            quantity,
            price_per_item,
            total_price: price_per_item * u64::from(quantity),
        })
    }
}
