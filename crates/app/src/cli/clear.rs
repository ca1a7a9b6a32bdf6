use clap::Args;

use mesa_app::{config::AppConfig, store::CartStore};

#[derive(Debug, Args)]
pub(crate) struct ClearArgs {
    #[command(flatten)]
    config: AppConfig,
}

pub(crate) fn run(args: ClearArgs) -> Result<(), String> {
    let mut store = CartStore::open(args.config.storage());

    store
        .clear()
        .map_err(|error| format!("failed to clear the cart: {error}"))?;

    println!("cart cleared");

    Ok(())
}
