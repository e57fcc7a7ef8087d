//! Application configuration module

use clap::Args;

use crate::config::{logging::LoggingConfig, store::StoreConfig};

pub mod logging;
pub mod store;

pub use logging::LogFormat;

/// Settings shared by every command.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Basket store settings.
    #[command(flatten)]
    pub store: StoreConfig,
}
