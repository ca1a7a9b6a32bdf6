//! Terminal rendering of the menu and the in-progress order.

use tabled::{
    Table,
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

use mesa::{cart::Cart, catalog::Product, pricing::format_minor};

/// Render the product catalog as a table.
#[must_use]
pub fn menu_table(products: &[Product]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Item", "Sizes", "Extras"]);

    for product in products {
        let sizes = product
            .sizes
            .iter()
            .map(|size| format!("{} {}", size.name, format_minor(size.price)))
            .collect::<Vec<_>>()
            .join(", ");

        let extras = product
            .extras
            .iter()
            .map(|extra| format!("{} +{}", extra.name, format_minor(extra.price)))
            .collect::<Vec<_>>()
            .join(", ");

        builder.push_record([
            product.id.as_str(),
            product.name.as_str(),
            sizes.as_str(),
            extras.as_str(),
        ]);
    }

    style(builder).to_string()
}

/// Render the cart as a table, one row per line item.
#[must_use]
pub fn cart_table(cart: &Cart) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Size", "Extras", "Note", "Qty", "Each", "Total"]);

    for item in cart.iter() {
        let extras = item.extras.join(", ");
        let quantity = item.quantity.to_string();
        let each = format_minor(item.price_per_item);
        let total = format_minor(item.total_price);

        builder.push_record([
            item.name.as_str(),
            item.size.as_str(),
            extras.as_str(),
            item.special_instructions.as_deref().unwrap_or(""),
            quantity.as_str(),
            each.as_str(),
            total.as_str(),
        ]);
    }

    let mut table = style(builder);
    table.modify(Columns::new(4..7), Alignment::right());

    table.to_string()
}

/// Render the subtotal/tax/total summary printed under the cart table.
#[must_use]
pub fn summary(cart: &Cart, tax: u64) -> String {
    let subtotal = cart.subtotal();

    format!(
        " Subtotal: {}\n      Tax: {}\n    Total: {}",
        format_minor(subtotal),
        format_minor(tax),
        format_minor(subtotal + tax),
    )
}

fn style(builder: Builder) -> Table {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    table
}

#[cfg(test)]
mod tests {
    use mesa::{
        catalog::{ExtraOption, SizeOption},
        items::{ConfigureError, LineItem},
    };
    use testresult::TestResult;

    use super::*;

    fn cart() -> Result<Cart, ConfigureError> {
        let product = Product {
            id: "cider-apple".to_string(),
            name: "Apple Cider".to_string(),
            image: None,
            sizes: vec![SizeOption {
                name: "Regular".to_string(),
                price: 17_00,
            }],
            extras: vec![ExtraOption {
                name: "Add Honey".to_string(),
                price: 2_00,
            }],
        };

        let extras = ["Add Honey".to_string()];
        let mut cart = Cart::new();
        cart.add(LineItem::configure(&product, "Regular", &extras, 2, None)?);

        Ok(cart)
    }

    #[test]
    fn cart_table_lists_each_line_item() -> TestResult {
        let rendered = cart_table(&cart()?);

        assert!(rendered.contains("Apple Cider"), "missing item name");
        assert!(rendered.contains("Add Honey"), "missing extras");
        assert!(rendered.contains("38.00"), "missing line total");

        Ok(())
    }

    #[test]
    fn menu_table_lists_sizes_and_extras() {
        let products = [Product {
            id: "v60".to_string(),
            name: "V60".to_string(),
            image: None,
            sizes: vec![SizeOption {
                name: "Regular".to_string(),
                price: 18_00,
            }],
            extras: vec![],
        }];

        let rendered = menu_table(&products);

        assert!(rendered.contains("V60"), "missing product name");
        assert!(rendered.contains("Regular 18.00"), "missing size price");
    }

    #[test]
    fn summary_adds_tax_to_the_subtotal() -> TestResult {
        let rendered = summary(&cart()?, 2_50);

        assert!(rendered.contains("38.00"), "missing subtotal");
        assert!(rendered.contains("2.50"), "missing tax");
        assert!(rendered.contains("40.50"), "missing total");

        Ok(())
    }
}
