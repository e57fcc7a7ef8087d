//! Storage errors.

use thiserror::Error;

use crate::storage::records::RecordError;

/// Errors raised by basket storage adapters.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file could not be read or written.
    #[error("failed to access basket store")]
    Io(#[from] std::io::Error),

    /// The backing document is not valid YAML for a basket store.
    #[error("failed to parse basket store")]
    Yaml(#[from] serde_norway::Error),

    /// A stored record does not form a valid
    /// [`Basket`](crate::domain::baskets::models::Basket).
    #[error("invalid basket record for {owner}")]
    InvalidRecord {
        /// Owner key of the offending record.
        owner: String,

        /// What was wrong with it.
        #[source]
        source: RecordError,
    },
}
