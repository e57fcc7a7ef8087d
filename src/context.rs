//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    config::store::StoreConfig,
    domain::baskets::{BasketMerger, BasketsRepository, BasketsService},
    storage::{FileBasketsRepository, InMemoryBasketsRepository, StorageError},
};

/// Failures while building the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The dry-run store could not be loaded.
    #[error("failed to load basket store")]
    Store(#[source] StorageError),
}

/// Services shared by the CLI commands.
#[derive(Clone)]
pub struct AppContext {
    /// Basket merging.
    pub baskets: Arc<dyn BasketsService>,

    /// Store the merger reads and writes.
    pub repository: Arc<dyn BasketsRepository>,
}

impl AppContext {
    /// Build application context over the given repository.
    pub fn new(repository: Arc<dyn BasketsRepository>) -> Self {
        Self {
            baskets: Arc::new(BasketMerger::new(Arc::clone(&repository))),
            repository,
        }
    }

    /// Build application context from store settings.
    ///
    /// A dry run copies the file store into memory so merges leave the file
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns an error when a dry run cannot load the file store.
    pub async fn from_store_config(config: &StoreConfig) -> Result<Self, AppInitError> {
        let file = FileBasketsRepository::new(&config.path);

        if !config.dry_run {
            return Ok(Self::new(Arc::new(file)));
        }

        let baskets = file.load_all().await.map_err(AppInitError::Store)?;

        info!(
            path = %config.path.display(),
            baskets = baskets.len(),
            "loaded basket store for dry run"
        );

        let memory = InMemoryBasketsRepository::with_baskets(baskets);

        Ok(Self::new(Arc::new(memory)))
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use testresult::TestResult;

    use crate::domain::baskets::data::{KeepOption, MergeRequest};

    use super::*;

    const STORE: &str = r#"
baskets:
  customerId:
    facility_service_id: AUTHENTICATED-FSID
    offers:
      - gtin: "123456"
        quantity: 1
        unit_price: "1.99 EUR"
  sessionId:
    facility_service_id: ANONYMOUS-FSID
    offers: []
"#;

    #[tokio::test]
    async fn dry_run_leaves_store_file_untouched() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("baskets.yml");

        fs::write(&path, STORE)?;

        let ctx = AppContext::from_store_config(&StoreConfig {
            path: path.clone(),
            dry_run: true,
        })
        .await?;

        let merged = ctx
            .baskets
            .merge_baskets(MergeRequest {
                customer_id: "customerId".to_string(),
                session_id: "sessionId".to_string(),
                keep: Some(KeepOption::Anonymous),
                merge_offers: true,
            })
            .await?;

        assert_eq!(merged.owner(), "customerId");
        assert_eq!(merged.facility_service_id(), "ANONYMOUS-FSID");
        assert_eq!(ctx.repository.find("sessionId").await?, None);
        assert_eq!(fs::read_to_string(&path)?, STORE, "file must not change");

        Ok(())
    }

    #[tokio::test]
    async fn dry_run_with_invalid_store_fails() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("baskets.yml");

        fs::write(&path, "baskets: [")?;

        let result = AppContext::from_store_config(&StoreConfig {
            path,
            dry_run: true,
        })
        .await;

        assert!(
            matches!(result, Err(AppInitError::Store(StorageError::Yaml(_)))),
            "expected Store error, got {:?}",
            result.err()
        );

        Ok(())
    }
}
