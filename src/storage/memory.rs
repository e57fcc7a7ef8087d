//! In-memory basket storage.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::{
    domain::baskets::{models::Basket, repository::BasketsRepository},
    storage::StorageError,
};

/// `HashMap`-backed basket store for tests, embedding and dry runs.
#[derive(Debug, Default)]
pub struct InMemoryBasketsRepository {
    baskets: RwLock<FxHashMap<String, Basket>>,
}

impl InMemoryBasketsRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given baskets, each under its own owner key.
    ///
    /// Later baskets replace earlier ones with the same owner.
    pub fn with_baskets(baskets: impl IntoIterator<Item = Basket>) -> Self {
        let baskets = baskets
            .into_iter()
            .map(|basket| (basket.owner().to_string(), basket))
            .collect();

        Self {
            baskets: RwLock::new(baskets),
        }
    }

    /// Number of stored baskets.
    pub async fn len(&self) -> usize {
        self.baskets.read().await.len()
    }

    /// Check if the store holds no baskets.
    pub async fn is_empty(&self) -> bool {
        self.baskets.read().await.is_empty()
    }
}

#[async_trait]
impl BasketsRepository for InMemoryBasketsRepository {
    async fn find(&self, owner: &str) -> Result<Option<Basket>, StorageError> {
        Ok(self.baskets.read().await.get(owner).cloned())
    }

    async fn save(&self, basket: Basket) -> Result<Basket, StorageError> {
        self.baskets
            .write()
            .await
            .insert(basket.owner().to_string(), basket.clone());

        Ok(basket)
    }

    async fn delete(&self, owner: &str) -> Result<(), StorageError> {
        self.baskets.write().await.remove(owner);

        Ok(())
    }
}
