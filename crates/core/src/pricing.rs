//! Pricing
//!
//! Unit price computation for a configured product: the chosen size's price
//! plus the sum of the selected extras' prices, in minor units.

use thiserror::Error;

use crate::catalog::Product;

/// Errors that can occur while pricing a product configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// The product has no size variant with the requested label.
    #[error("product {product} has no size named {size}")]
    UnknownSize {
        /// Catalog id of the product.
        product: String,
        /// The requested size label.
        size: String,
    },

    /// The product has no extra with the requested label.
    #[error("product {product} has no extra named {extra}")]
    UnknownExtra {
        /// Catalog id of the product.
        product: String,
        /// The requested extra label.
        extra: String,
    },
}

/// Compute the per-unit price of a product configured with a size and extras.
///
/// Size and extra labels are matched exactly against the catalog entry.
///
/// # Errors
///
/// - [`PricingError::UnknownSize`]: the size label is not offered by the product.
/// - [`PricingError::UnknownExtra`]: an extra label is not offered by the product.
pub fn unit_price(product: &Product, size: &str, extras: &[String]) -> Result<u64, PricingError> {
    let size = product
        .size(size)
        .ok_or_else(|| PricingError::UnknownSize {
            product: product.id.clone(),
            size: size.to_string(),
        })?;

    extras.iter().try_fold(size.price, |total, name| {
        let extra = product
            .extra(name)
            .ok_or_else(|| PricingError::UnknownExtra {
                product: product.id.clone(),
                extra: name.clone(),
            })?;

        Ok(total + extra.price)
    })
}

/// Render a minor-unit amount with two decimal places, e.g. `1299` as `"12.99"`.
#[must_use]
pub fn format_minor(amount: u64) -> String {
    format!("{}.{:02}", amount / 100, amount % 100)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::catalog::{ExtraOption, SizeOption};

    use super::*;

    fn burger() -> Product {
        Product {
            id: "burger-1".to_string(),
            name: "Burger".to_string(),
            image: None,
            sizes: vec![SizeOption {
                name: "Regular".to_string(),
                price: 15_99,
            }],
            extras: vec![
                ExtraOption {
                    name: "Bacon".to_string(),
                    price: 2_00,
                },
                ExtraOption {
                    name: "Add Cheese".to_string(),
                    price: 1_00,
                },
            ],
        }
    }

    #[test]
    fn size_alone_prices_the_unit() -> TestResult {
        let price = unit_price(&burger(), "Regular", &[])?;

        assert_eq!(price, 15_99);

        Ok(())
    }

    #[test]
    fn extras_add_to_the_unit_price() -> TestResult {
        let extras = ["Bacon".to_string(), "Add Cheese".to_string()];
        let price = unit_price(&burger(), "Regular", &extras)?;

        assert_eq!(price, 18_99);

        Ok(())
    }

    #[test]
    fn unknown_size_errors() {
        let result = unit_price(&burger(), "Mega", &[]);

        assert!(
            matches!(result, Err(PricingError::UnknownSize { ref size, .. }) if size == "Mega"),
            "expected UnknownSize, got {result:?}"
        );
    }

    #[test]
    fn unknown_extra_errors() {
        let extras = ["Gold Leaf".to_string()];
        let result = unit_price(&burger(), "Regular", &extras);

        assert!(
            matches!(result, Err(PricingError::UnknownExtra { ref extra, .. }) if extra == "Gold Leaf"),
            "expected UnknownExtra, got {result:?}"
        );
    }

    #[test]
    fn formats_minor_units() {
        assert_eq!(format_minor(12_99), "12.99");
        assert_eq!(format_minor(2_50), "2.50");
        assert_eq!(format_minor(5), "0.05");
        assert_eq!(format_minor(0), "0.00");
    }
}
