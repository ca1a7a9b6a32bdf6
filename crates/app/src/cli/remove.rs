use clap::Args;

use mesa::items::LineItemId;
use mesa_app::{config::AppConfig, receipt, store::CartStore};

#[derive(Debug, Args)]
pub(crate) struct RemoveArgs {
    /// Line item id, as printed by `show --ids`
    #[arg(long)]
    item: String,

    #[command(flatten)]
    config: AppConfig,
}

pub(crate) fn run(args: RemoveArgs) -> Result<(), String> {
    let mut store = CartStore::open(args.config.storage());
    let id = LineItemId::from(args.item);

    let removed = store
        .remove_item(&id)
        .map_err(|error| format!("failed to save the cart: {error}"))?;

    if !removed {
        println!("no such line item");
        return Ok(());
    }

    if store.cart().is_empty() {
        println!("your order is now empty");
    } else {
        println!("{}", receipt::cart_table(store.cart()));
    }

    Ok(())
}
