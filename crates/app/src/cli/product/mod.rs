use clap::{Args, Subcommand};

mod list;

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    /// List the catalog with stock and both price tiers
    List(list::ListProductsArgs),
}

pub(crate) async fn run(command: ProductCommand) -> Result<(), String> {
    match command.command {
        ProductSubcommand::List(args) => list::run(args).await,
    }
}
