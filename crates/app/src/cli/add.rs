use clap::Args;

use mesa::items::LineItem;
use mesa_app::{config::AppConfig, context::AppContext, receipt, store::CartStore};

#[derive(Debug, Args)]
pub(crate) struct AddArgs {
    /// Catalog id of the product
    #[arg(long)]
    product: String,

    /// Size label to order, e.g. "Medium"
    #[arg(long)]
    size: String,

    /// Extra to add; repeat for several
    #[arg(long = "extra")]
    extras: Vec<String>,

    /// Number of units
    #[arg(long, default_value_t = 1)]
    quantity: u32,

    /// Special instructions for the kitchen
    #[arg(long)]
    note: Option<String>,

    #[command(flatten)]
    config: AppConfig,
}

pub(crate) async fn run(args: AddArgs) -> Result<(), String> {
    let context = AppContext::from_config(&args.config)
        .map_err(|error| format!("failed to initialise: {error}"))?;

    let product = context
        .catalog
        .get_product(args.product)
        .await
        .map_err(|error| format!("failed to fetch the product: {error}"))?;

    let item = LineItem::configure(&product, &args.size, &args.extras, args.quantity, args.note)
        .map_err(|error| format!("cannot add {}: {error}", product.name))?;

    let mut store = CartStore::open(args.config.storage());

    store
        .add(item)
        .map_err(|error| format!("failed to save the cart: {error}"))?;

    println!("{}", receipt::cart_table(store.cart()));

    Ok(())
}
