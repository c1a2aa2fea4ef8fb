use clap::{Args, Subcommand};

mod list;

#[derive(Debug, Args)]
pub(crate) struct CustomerCommand {
    #[command(subcommand)]
    command: CustomerSubcommand,
}

#[derive(Debug, Subcommand)]
enum CustomerSubcommand {
    /// List the most recently added customers
    List(list::ListCustomersArgs),
}

pub(crate) async fn run(command: CustomerCommand) -> Result<(), String> {
    match command.command {
        CustomerSubcommand::List(args) => list::run(args).await,
    }
}
