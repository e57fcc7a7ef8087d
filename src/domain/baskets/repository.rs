//! Baskets Repository

use async_trait::async_trait;
use mockall::automock;

use crate::{domain::baskets::models::Basket, storage::StorageError};

/// Key-value persistence of whole baskets, keyed by owner.
///
/// Each call is expected to be atomic on its own; callers get no
/// transaction spanning several calls.
#[automock]
#[async_trait]
pub trait BasketsRepository: Send + Sync {
    /// Retrieve the basket stored under `owner`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the store cannot be read.
    async fn find(&self, owner: &str) -> Result<Option<Basket>, StorageError>;

    /// Insert or replace the basket under its own owner key.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the store cannot be written.
    async fn save(&self, basket: Basket) -> Result<Basket, StorageError>;

    /// Remove the basket stored under `owner`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the store cannot be written.
    async fn delete(&self, owner: &str) -> Result<(), StorageError>;
}
