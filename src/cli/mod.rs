use std::error::Error;

use basket_merge::{
    config::AppConfig, context::AppContext, domain::baskets::models::Basket,
    storage::records::StoreDocument,
};
use clap::{Parser, Subcommand};

mod merge;
mod show;

#[derive(Debug, Parser)]
#[command(
    name = "basket-merge",
    about = "Merge anonymous and customer baskets at login",
    long_about = None
)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Merge a session basket into a customer's
    Merge(merge::MergeArgs),

    /// Print a stored basket
    Show(show::ShowArgs),
}

impl Cli {
    /// Load configuration from `.env`, environment and arguments.
    pub(crate) fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub(crate) async fn run(self) -> Result<(), String> {
        let ctx = AppContext::from_store_config(&self.config.store)
            .await
            .map_err(|error| format!("failed to initialize app context: {}", chain(&error)))?;

        let output = match self.command {
            Commands::Merge(args) => merge::run(&ctx, args).await?,
            Commands::Show(args) => show::run(&ctx, args).await?,
        };

        #[expect(clippy::print_stdout, reason = "command output to user")]
        {
            print!("{output}");
        }

        Ok(())
    }
}

/// Render a basket as a single-entry store document.
fn render(basket: &Basket) -> Result<String, String> {
    serde_norway::to_string(&StoreDocument::single(basket))
        .map_err(|error| format!("failed to render basket: {error}"))
}

/// Error message followed by its sources.
fn chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
