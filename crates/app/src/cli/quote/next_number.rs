use clap::Args;
use cotizador_app::config::{DatabaseConfig, QuoteConfig};

use crate::cli::app_context;

#[derive(Debug, Args)]
pub(crate) struct NextNumberArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    #[command(flatten)]
    quote: QuoteConfig,
}

pub(crate) async fn run(args: NextNumberArgs) -> Result<(), String> {
    let ctx = app_context(&args.database, args.quote.settings()).await?;

    let number = ctx
        .orders
        .next_order_number(args.quote.session())
        .await
        .map_err(|error| format!("failed to read order numbers: {error}"))?;

    println!("{number}");

    Ok(())
}
