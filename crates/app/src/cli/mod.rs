use clap::{Parser, Subcommand};

mod add;
mod clear;
mod menu;
mod remove;
mod show;
mod submit;
mod update;

#[derive(Debug, Parser)]
#[command(name = "mesa", about = "Table-ordering cart CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the products on the menu
    Menu(menu::MenuArgs),
    /// Add a configured product to the cart
    Add(add::AddArgs),
    /// Show the cart and its totals
    Show(show::ShowArgs),
    /// Change a line item's quantity
    Update(update::UpdateArgs),
    /// Remove a line item
    Remove(remove::RemoveArgs),
    /// Empty the cart
    Clear(clear::ClearArgs),
    /// Place the order
    Submit(submit::SubmitArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Menu(args) => menu::run(args).await,
            Commands::Add(args) => add::run(args).await,
            Commands::Show(args) => show::run(args),
            Commands::Update(args) => update::run(args),
            Commands::Remove(args) => remove::run(args),
            Commands::Clear(args) => clear::run(args),
            Commands::Submit(args) => submit::run(args).await,
        }
    }
}
