use clap::Args;

use mesa_app::{config::AppConfig, context::AppContext, receipt};

#[derive(Debug, Args)]
pub(crate) struct MenuArgs {
    #[command(flatten)]
    config: AppConfig,
}

pub(crate) async fn run(args: MenuArgs) -> Result<(), String> {
    let context = AppContext::from_config(&args.config)
        .map_err(|error| format!("failed to initialise: {error}"))?;

    let products = context
        .catalog
        .list_products()
        .await
        .map_err(|error| format!("failed to fetch the menu: {error}"))?;

    if products.is_empty() {
        println!("the menu is empty");
        return Ok(());
    }

    println!("{}", receipt::menu_table(&products));

    Ok(())
}
