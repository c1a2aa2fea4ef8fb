use std::path::PathBuf;

use clap::Args;
use cotizador_app::{
    config::{DatabaseConfig, QuoteConfig},
    drafts::DraftDocument,
};

use crate::cli::{app_context, quote::print_order};

#[derive(Debug, Args)]
pub(crate) struct SubmitQuoteArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    #[command(flatten)]
    quote: QuoteConfig,

    /// YAML draft document describing the quote
    #[arg(long)]
    draft: PathBuf,
}

pub(crate) async fn run(args: SubmitQuoteArgs) -> Result<(), String> {
    let document = DraftDocument::from_path(&args.draft)
        .await
        .map_err(|error| format!("{}: {error}", args.draft.display()))?;

    let ctx = app_context(&args.database, args.quote.settings()).await?;
    let session = args.quote.session();

    let draft = document
        .resolve(session, ctx.products.as_ref())
        .await
        .map_err(|error| format!("{}: {error}", args.draft.display()))?;

    let order = ctx
        .quotes
        .submit_quote(session, draft)
        .await
        .map_err(|error| error.to_string())?;

    print_order(&order)
}
