//! Catalog
//!
//! Schema types for the product catalog read boundary. The catalog itself is
//! owned by the menu service; these types only describe the JSON it serves,
//! read at add-to-cart time to price a configuration.

use serde::{Deserialize, Serialize};

/// A product as served by the menu service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier of the product.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name.
    pub name: String,

    /// Display image URL, when the catalog carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Size variants the product can be ordered in.
    #[serde(default)]
    pub sizes: Vec<SizeOption>,

    /// Extras that can be added to the product.
    #[serde(default)]
    pub extras: Vec<ExtraOption>,
}

/// A selectable size variant and its price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOption {
    /// Size label, e.g. `"Medium"`.
    pub name: String,

    /// Unit price for this size, in minor units.
    pub price: u64,
}

/// A selectable extra and its price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraOption {
    /// Extra label, e.g. `"Bacon"`.
    pub name: String,

    /// Price added per unit when selected, in minor units.
    pub price: u64,
}

impl Product {
    /// Look up a size variant by its exact label.
    #[must_use]
    pub fn size(&self, name: &str) -> Option<&SizeOption> {
        self.sizes.iter().find(|size| size.name == name)
    }

    /// Look up an extra by its exact label.
    #[must_use]
    pub fn extra(&self, name: &str) -> Option<&ExtraOption> {
        self.extras.iter().find(|extra| extra.name == name)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn margherita() -> Product {
        Product {
            id: "pizza-1".to_string(),
            name: "Margherita Pizza".to_string(),
            image: None,
            sizes: vec![
                SizeOption {
                    name: "Medium".to_string(),
                    price: 12_99,
                },
                SizeOption {
                    name: "Large".to_string(),
                    price: 15_99,
                },
            ],
            extras: vec![ExtraOption {
                name: "Extra Cheese".to_string(),
                price: 1_50,
            }],
        }
    }

    #[test]
    fn size_lookup_is_exact() {
        let product = margherita();

        assert_eq!(
            product.size("Medium").map(|size| size.price),
            Some(12_99)
        );
        assert_eq!(product.size("medium"), None);
    }

    #[test]
    fn extra_lookup_is_exact() {
        let product = margherita();

        assert_eq!(
            product.extra("Extra Cheese").map(|extra| extra.price),
            Some(1_50)
        );
        assert_eq!(product.extra("Cheese"), None);
    }

    #[test]
    fn deserializes_catalog_shape() -> TestResult {
        let raw = r#"{
            "_id": "pizza-1",
            "name": "Margherita Pizza",
            "image": "/margherita.jpg",
            "sizes": [{ "name": "Medium", "price": 1299 }],
            "extras": [{ "name": "Extra Cheese", "price": 150 }]
        }"#;

        let product: Product = serde_json::from_str(raw)?;

        assert_eq!(product.id, "pizza-1");
        assert_eq!(product.image.as_deref(), Some("/margherita.jpg"));
        assert_eq!(product.sizes.len(), 1);
        assert_eq!(product.extras.len(), 1);

        Ok(())
    }

    #[test]
    fn missing_variant_lists_default_to_empty() -> TestResult {
        let raw = r#"{ "_id": "water", "name": "Still Water" }"#;

        let product: Product = serde_json::from_str(raw)?;

        assert!(product.sizes.is_empty());
        assert!(product.extras.is_empty());
        assert_eq!(product.image, None);

        Ok(())
    }
}
