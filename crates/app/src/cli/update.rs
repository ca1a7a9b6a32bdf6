use clap::Args;

use mesa::items::LineItemId;
use mesa_app::{config::AppConfig, receipt, store::CartStore};

#[derive(Debug, Args)]
pub(crate) struct UpdateArgs {
    /// Line item id, as printed by `show --ids`
    #[arg(long)]
    item: String,

    /// Quantity change, e.g. 1 or -1
    #[arg(long, allow_hyphen_values = true)]
    delta: i32,

    #[command(flatten)]
    config: AppConfig,
}

pub(crate) fn run(args: UpdateArgs) -> Result<(), String> {
    let mut store = CartStore::open(args.config.storage());
    let id = LineItemId::from(args.item);

    let changed = store
        .update_quantity(&id, args.delta)
        .map_err(|error| format!("failed to save the cart: {error}"))?;

    if changed {
        println!("{}", receipt::cart_table(store.cart()));
    } else {
        println!("nothing to change");
    }

    Ok(())
}
