use clap::Args;
use cotizador_app::{
    config::{DatabaseConfig, QuoteConfig},
    domain::orders::records::OrderUuid,
};
use uuid::Uuid;

use crate::cli::{app_context, quote::print_order};

#[derive(Debug, Args)]
pub(crate) struct ShowQuoteArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    #[command(flatten)]
    quote: QuoteConfig,

    /// Order UUID
    order_uuid: Uuid,
}

pub(crate) async fn run(args: ShowQuoteArgs) -> Result<(), String> {
    let ctx = app_context(&args.database, args.quote.settings()).await?;

    let order = ctx
        .orders
        .get_order(args.quote.session(), OrderUuid::from_uuid(args.order_uuid))
        .await
        .map_err(|error| format!("failed to load quote {}: {error}", args.order_uuid))?;

    print_order(&order)
}
