use clap::Args;

use mesa::order::CheckoutDetails;
use mesa_app::{config::AppConfig, context::AppContext, receipt, store::CartStore};

#[derive(Debug, Args)]
pub(crate) struct SubmitArgs {
    /// Name the order is placed under
    #[arg(long)]
    name: String,

    /// Table the order is delivered to
    #[arg(long)]
    table: String,

    /// Tax charged at checkout, in minor units
    #[arg(long, default_value_t = 2_50)]
    tax: u64,

    #[command(flatten)]
    config: AppConfig,
}

pub(crate) async fn run(args: SubmitArgs) -> Result<(), String> {
    let context = AppContext::from_config(&args.config)
        .map_err(|error| format!("failed to initialise: {error}"))?;

    let mut store = CartStore::open(args.config.storage());

    let details = CheckoutDetails {
        customer_name: args.name,
        table_number: args.table,
        tax: args.tax,
    };

    if !store.cart().is_empty() {
        println!("{}", receipt::cart_table(store.cart()));
        println!("{}", receipt::summary(store.cart(), details.tax));
    }

    let confirmation = context
        .checkout
        .submit(&mut store, &details)
        .await
        .map_err(|error| format!("failed to place the order: {error}"))?;

    println!("order_id: {}", confirmation.id);
    println!("status: {:?}", confirmation.status);
    println!(
        "thank you, {}; your food will be delivered to table {}",
        details.customer_name.trim(),
        details.table_number.trim()
    );

    Ok(())
}
