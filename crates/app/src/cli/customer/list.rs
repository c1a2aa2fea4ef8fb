use clap::Args;
use cotizador_app::config::{DatabaseConfig, QuoteConfig};

use crate::cli::{app_context, money};

#[derive(Debug, Args)]
pub(crate) struct ListCustomersArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    #[command(flatten)]
    quote: QuoteConfig,

    /// Maximum number of customers to show
    #[arg(long, default_value_t = 20)]
    limit: u32,
}

pub(crate) async fn run(args: ListCustomersArgs) -> Result<(), String> {
    let ctx = app_context(&args.database, args.quote.settings()).await?;

    let customers = ctx
        .customers
        .list_customers(args.quote.session(), args.limit)
        .await
        .map_err(|error| format!("failed to list customers: {error}"))?;

    if customers.is_empty() {
        println!("no customers found");
        return Ok(());
    }

    for customer in customers {
        println!("customer_uuid: {}", customer.uuid);
        println!("name: {}", customer.name);
        println!("phone: {}", customer.phone);
        println!("source: {}", customer.source);
        println!("material_preference: {}", customer.material_preference);
        println!("credit_limit: {}", money(customer.credit_limit)?);
        println!("credit_status: {}", customer.credit_status);
        println!("created_at: {}", customer.created_at);
        println!();
    }

    Ok(())
}
