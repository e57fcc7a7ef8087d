//! Baskets service errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Basket merge error variants.
#[derive(Debug, Error)]
pub enum BasketsServiceError {
    /// A precondition on the request did not hold. No storage call was made.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A basket the merge requires is not stored under the given key.
    #[error("basket not found: {0}")]
    NotFound(String),

    /// Underlying storage error.
    #[error("storage error")]
    Storage(#[from] StorageError),
}
