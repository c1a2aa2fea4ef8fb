use clap::Args;
use cotizador_app::config::{DatabaseConfig, QuoteConfig};

use crate::cli::{app_context, money};

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    #[command(flatten)]
    quote: QuoteConfig,
}

pub(crate) async fn run(args: ListProductsArgs) -> Result<(), String> {
    let ctx = app_context(&args.database, args.quote.settings()).await?;

    let products = ctx
        .products
        .list_products(args.quote.session())
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products found");
        return Ok(());
    }

    for product in products {
        println!("product_uuid: {}", product.uuid);
        println!("sku: {}", product.sku);
        println!("name: {}", product.name);
        println!("material: {}", product.material);
        println!("stock: {}", product.total_stock);
        println!("retail_price: {}", money(product.retail_price)?);
        println!("wholesale_price: {}", money(product.wholesale_price)?);
        println!();
    }

    Ok(())
}
