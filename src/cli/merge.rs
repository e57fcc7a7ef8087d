use basket_merge::{
    context::AppContext,
    domain::baskets::data::{KeepOption, MergeRequest},
};
use clap::{Args, ValueEnum};

use super::{chain, render};

/// Basket that survives the merge.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum KeepArg {
    /// The customer's basket
    Authenticated,

    /// The session's basket, re-keyed to the customer
    Anonymous,
}

impl From<KeepArg> for KeepOption {
    fn from(keep: KeepArg) -> Self {
        match keep {
            KeepArg::Authenticated => Self::Authenticated,
            KeepArg::Anonymous => Self::Anonymous,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct MergeArgs {
    /// Authenticated customer id
    #[arg(long)]
    customer_id: String,

    /// Anonymous session id
    #[arg(long)]
    session_id: String,

    /// Basket whose identity and content survive
    #[arg(long, value_enum)]
    keep: KeepArg,

    /// Add the other basket's offers for gtins the kept basket lacks
    #[arg(long, default_value_t = false)]
    merge_offers: bool,
}

pub(crate) async fn run(ctx: &AppContext, args: MergeArgs) -> Result<String, String> {
    let basket = ctx
        .baskets
        .merge_baskets(MergeRequest {
            customer_id: args.customer_id,
            session_id: args.session_id,
            keep: Some(args.keep.into()),
            merge_offers: args.merge_offers,
        })
        .await
        .map_err(|error| format!("failed to merge baskets: {}", chain(&error)))?;

    render(&basket)
}
