use clap::{Args, Subcommand};
use cotizador_app::domain::orders::records::OrderRecord;

use crate::cli::money;

mod next_number;
mod show;
mod submit;

#[derive(Debug, Args)]
pub(crate) struct QuoteCommand {
    #[command(subcommand)]
    command: QuoteSubcommand,
}

#[derive(Debug, Subcommand)]
enum QuoteSubcommand {
    /// Save a quote described by a draft document
    Submit(submit::SubmitQuoteArgs),

    /// Show a saved quote with its items
    Show(show::ShowQuoteArgs),

    /// Print the number the next quote will receive
    NextNumber(next_number::NextNumberArgs),
}

pub(crate) async fn run(command: QuoteCommand) -> Result<(), String> {
    match command.command {
        QuoteSubcommand::Submit(args) => submit::run(args).await,
        QuoteSubcommand::Show(args) => show::run(args).await,
        QuoteSubcommand::NextNumber(args) => next_number::run(args).await,
    }
}

fn print_order(order: &OrderRecord) -> Result<(), String> {
    println!("order_uuid: {}", order.uuid);
    println!("order_number: {}", order.order_number);
    println!(
        "customer: {}",
        order.customer_name.as_deref().unwrap_or("none")
    );
    println!("order_type: {}", order.order_type);
    println!("status: {}", order.status);
    println!("payment_status: {}", order.payment_status);
    println!("delivery_method: {}", order.delivery_method);

    if let Some(address) = &order.delivery_address {
        println!("delivery_address: {address}");
    }

    if let Some(notes) = &order.notes {
        println!("notes: {notes}");
    }

    for item in &order.items {
        println!(
            "item: {} x{} {} @ {} = {}",
            item.product_sku,
            item.quantity,
            item.product_name,
            money(item.unit_price)?,
            money(item.subtotal)?,
        );
    }

    println!("subtotal: {}", money(order.subtotal)?);
    println!("discount: {}", money(order.discount)?);
    println!("total: {}", money(order.total)?);
    println!("created_at: {}", order.created_at);

    Ok(())
}
