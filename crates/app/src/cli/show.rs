use clap::Args;

use mesa::pricing::format_minor;
use mesa_app::{config::AppConfig, receipt, store::CartStore};

#[derive(Debug, Args)]
pub(crate) struct ShowArgs {
    /// Also print line item ids, for `update` and `remove`
    #[arg(long)]
    ids: bool,

    #[command(flatten)]
    config: AppConfig,
}

pub(crate) fn run(args: ShowArgs) -> Result<(), String> {
    let store = CartStore::open(args.config.storage());

    if store.cart().is_empty() {
        println!("your order is empty; add some items from the menu");
        return Ok(());
    }

    println!("{}", receipt::cart_table(store.cart()));
    println!("subtotal: {}", format_minor(store.cart().subtotal()));

    if args.ids {
        for item in store.cart().iter() {
            println!("{}  {}", item.id, item.name);
        }
    }

    Ok(())
}
