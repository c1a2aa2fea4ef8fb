use std::fmt::Display;

use clap::{Parser, Subcommand};
use cotizador_app::{
    config::{DatabaseConfig, LoggingConfig},
    context::AppContext,
    domain::{quotes::QuoteSettings, store_currency},
};
use rusty_money::Money;

mod customer;
mod db;
mod product;
mod quote;

#[derive(Debug, Parser)]
#[command(name = "cotizador-app", about = "Jewelry quote CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Product(product::ProductCommand),
    Customer(customer::CustomerCommand),
    Quote(quote::QuoteCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Product(command) => product::run(command).await,
            Commands::Customer(command) => customer::run(command).await,
            Commands::Quote(command) => quote::run(command).await,
        }
    }
}

async fn app_context(
    database: &DatabaseConfig,
    settings: QuoteSettings,
) -> Result<AppContext, String> {
    AppContext::from_database_url(&database.database_url, settings)
        .await
        .map_err(|error| format!("{error}: {}", error_source(&error)))
}

fn error_source(error: &dyn std::error::Error) -> String {
    error
        .source()
        .map_or_else(String::new, ToString::to_string)
}

/// Format minor units in the store currency, e.g. `$1,299.50`.
fn money<T>(minor: T) -> Result<String, String>
where
    T: TryInto<i64> + Copy + Display,
{
    let amount = minor
        .try_into()
        .map_err(|_overflow| format!("amount {minor} is too large to display"))?;

    Ok(Money::from_minor(amount, store_currency()).to_string())
}
