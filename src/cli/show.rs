use basket_merge::context::AppContext;
use clap::Args;

use super::{chain, render};

#[derive(Debug, Args)]
pub(crate) struct ShowArgs {
    /// Owner key (customer or session id)
    #[arg(long)]
    owner: String,
}

pub(crate) async fn run(ctx: &AppContext, args: ShowArgs) -> Result<String, String> {
    let basket = ctx
        .repository
        .find(&args.owner)
        .await
        .map_err(|error| format!("failed to load basket: {}", chain(&error)))?
        .ok_or_else(|| format!("basket not found: {}", args.owner))?;

    render(&basket)
}
