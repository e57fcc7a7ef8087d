//! Store Config

use std::path::PathBuf;

use clap::Args;

/// Basket store settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Path of the YAML basket store
    #[arg(
        long = "store",
        env = "BASKET_STORE_PATH",
        default_value = "baskets.yml",
        global = true
    )]
    pub path: PathBuf,

    /// Load the store into memory and never write it back
    #[arg(
        long,
        env = "BASKET_STORE_DRY_RUN",
        default_value_t = false,
        global = true
    )]
    pub dry_run: bool,
}
