//! YAML file basket storage.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::{fs, sync::Mutex};
use tracing::debug;

use crate::{
    domain::baskets::{models::Basket, repository::BasketsRepository},
    storage::{
        StorageError,
        records::{BasketRecord, StoreDocument},
    },
};

/// Basket store kept as a single YAML document on disk.
///
/// Every call reads the document. `save` and `delete` rewrite it while
/// holding the store's lock, so calls through one instance do not
/// interleave. A missing or empty file is an empty store.
#[derive(Debug)]
pub struct FileBasketsRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileBasketsRepository {
    /// Create a store backed by the document at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode every stored basket.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the document cannot be read or parsed,
    /// or if any record is invalid.
    pub async fn load_all(&self) -> Result<Vec<Basket>, StorageError> {
        let _guard = self.lock.lock().await;

        self.read_document()
            .await?
            .baskets
            .into_iter()
            .map(|(owner, record)| decode(&owner, record))
            .collect()
    }

    async fn read_document(&self) -> Result<StoreDocument, StorageError> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "basket store missing, treating as empty");

                return Ok(StoreDocument::default());
            }
            Err(error) => return Err(error.into()),
        };

        if contents.trim().is_empty() {
            return Ok(StoreDocument::default());
        }

        Ok(serde_norway::from_str(&contents)?)
    }

    async fn write_document(&self, document: &StoreDocument) -> Result<(), StorageError> {
        let contents = serde_norway::to_string(document)?;

        fs::write(&self.path, contents).await?;

        Ok(())
    }
}

fn decode(owner: &str, record: BasketRecord) -> Result<Basket, StorageError> {
    record
        .into_basket(owner)
        .map_err(|source| StorageError::InvalidRecord {
            owner: owner.to_string(),
            source,
        })
}

#[async_trait]
impl BasketsRepository for FileBasketsRepository {
    async fn find(&self, owner: &str) -> Result<Option<Basket>, StorageError> {
        let _guard = self.lock.lock().await;

        self.read_document()
            .await?
            .baskets
            .remove(owner)
            .map(|record| decode(owner, record))
            .transpose()
    }

    async fn save(&self, basket: Basket) -> Result<Basket, StorageError> {
        let _guard = self.lock.lock().await;

        let mut document = self.read_document().await?;

        document
            .baskets
            .insert(basket.owner().to_string(), BasketRecord::from(&basket));

        self.write_document(&document).await?;

        debug!(owner = basket.owner(), path = %self.path.display(), "saved basket");

        Ok(basket)
    }

    async fn delete(&self, owner: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;

        let mut document = self.read_document().await?;

        if document.baskets.remove(owner).is_some() {
            self.write_document(&document).await?;

            debug!(owner, path = %self.path.display(), "deleted basket");
        }

        Ok(())
    }
}
