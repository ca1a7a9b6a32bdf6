//! Orders
//!
//! Construction and validation of the order-creation payload. The cart is
//! serialised into the wire shape the order service accepts; validation
//! failures are rejected here, before any network activity.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::Cart;

/// Checkout input supplied by the customer, not part of the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutDetails {
    /// Name the order is placed under.
    pub customer_name: String,

    /// Table the order is delivered to.
    pub table_number: String,

    /// Externally computed tax, in minor units. Added to the submitted
    /// total; the engine never derives it.
    pub tax: u64,
}

/// Validation errors rejected before submission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderValidationError {
    /// An order needs at least one line item.
    #[error("cannot place an order with an empty cart")]
    EmptyCart,

    /// The customer name was empty or whitespace.
    #[error("customer name is required")]
    MissingCustomerName,

    /// The table number was empty or whitespace.
    #[error("table number is required")]
    MissingTableNumber,
}

/// The order-creation request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Name the order is placed under.
    pub customer_name: String,

    /// Table the order is delivered to.
    pub table_number: String,

    /// Cart subtotal plus tax at the submission instant, in minor units.
    pub total_price: u64,

    /// One entry per line item.
    pub products: Vec<OrderProduct>,
}

/// One ordered product within the request body.
///
/// `_id` carries the raw catalog id, not the cart's derived identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProduct {
    /// Catalog id of the product.
    #[serde(rename = "_id")]
    pub product_id: String,

    /// Display name snapshot.
    pub name: String,

    /// Number of units.
    pub quantity: u32,

    /// Selected size label.
    pub size: String,

    /// Per-unit price snapshot, in minor units.
    pub price_per_item: u64,

    /// Selected extras, in selection order.
    pub extras: Vec<String>,
}

/// Build the order-creation payload from a cart and checkout details.
///
/// The total is snapshotted here: cart subtotal plus the externally
/// computed tax. Customer fields are trimmed of surrounding whitespace.
///
/// # Errors
///
/// - [`OrderValidationError::EmptyCart`]: the cart holds no line items.
/// - [`OrderValidationError::MissingCustomerName`]: the name is empty or whitespace.
/// - [`OrderValidationError::MissingTableNumber`]: the table number is empty or whitespace.
pub fn build_order(
    cart: &Cart,
    details: &CheckoutDetails,
) -> Result<OrderRequest, OrderValidationError> {
    if cart.is_empty() {
        return Err(OrderValidationError::EmptyCart);
    }

    let customer_name = details.customer_name.trim();

    if customer_name.is_empty() {
        return Err(OrderValidationError::MissingCustomerName);
    }

    let table_number = details.table_number.trim();

    if table_number.is_empty() {
        return Err(OrderValidationError::MissingTableNumber);
    }

    Ok(OrderRequest {
        customer_name: customer_name.to_string(),
        table_number: table_number.to_string(),
        total_price: cart.subtotal() + details.tax,
        products: cart
            .iter()
            .map(|item| OrderProduct {
                product_id: item.product_id.clone(),
                name: item.name.clone(),
                quantity: item.quantity,
                size: item.size.clone(),
                price_per_item: item.price_per_item,
                extras: item.extras.to_vec(),
            })
            .collect(),
    })
}
