//! Baskets service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, debug, info};

use crate::domain::baskets::{
    data::{KeepOption, MergeRequest, ValidatedMerge},
    errors::BasketsServiceError,
    models::Basket,
    repository::BasketsRepository,
};

/// Merges a session's basket into a customer's at login.
#[derive(Clone)]
pub struct BasketMerger {
    repository: Arc<dyn BasketsRepository>,
}

impl BasketMerger {
    /// Create a merger over the given basket store.
    #[must_use]
    pub fn new(repository: Arc<dyn BasketsRepository>) -> Self {
        Self { repository }
    }

    async fn require(&self, owner: &str) -> Result<Basket, BasketsServiceError> {
        self.repository
            .find(owner)
            .await?
            .ok_or_else(|| BasketsServiceError::NotFound(owner.to_string()))
    }

    /// The customer's basket survives. Returns the basket and how many
    /// offers the session basket contributed.
    async fn keep_authenticated(
        &self,
        merge: ValidatedMerge<'_>,
    ) -> Result<(Basket, usize), BasketsServiceError> {
        let authenticated = self.require(merge.customer_id).await?;

        if !merge.merge_offers {
            return Ok((authenticated, 0));
        }

        let anonymous = self.require(merge.session_id).await?;

        let own = authenticated.len();
        let merged = authenticated.union(anonymous);
        let contributed = merged.len() - own;

        let saved = self.repository.save(merged).await?;

        Ok((saved, contributed))
    }

    /// The session's basket survives under the customer's id.
    async fn keep_anonymous(
        &self,
        merge: ValidatedMerge<'_>,
    ) -> Result<(Basket, usize), BasketsServiceError> {
        let mut kept = self
            .require(merge.session_id)
            .await?
            .rekey(merge.customer_id);

        let mut contributed = 0;

        if merge.merge_offers {
            let authenticated = self.require(merge.customer_id).await?;

            let own = kept.len();
            kept = kept.union(authenticated);
            contributed = kept.len() - own;
        }

        let saved = self.repository.save(kept).await?;

        Ok((saved, contributed))
    }
}

impl Debug for BasketMerger {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("BasketMerger").finish_non_exhaustive()
    }
}

#[async_trait]
impl BasketsService for BasketMerger {
    #[tracing::instrument(
        name = "baskets.service.merge_baskets",
        skip(self, request),
        fields(
            customer_id = %request.customer_id,
            session_id = %request.session_id,
            merge_offers = request.merge_offers,
            keep = tracing::field::Empty,
            offer_count = tracing::field::Empty,
            contributed = tracing::field::Empty
        ),
        err
    )]
    async fn merge_baskets(&self, request: MergeRequest) -> Result<Basket, BasketsServiceError> {
        let merge = request.validate()?;

        let span = Span::current();

        span.record("keep", tracing::field::display(merge.keep));

        let (merged, contributed) = match merge.keep {
            KeepOption::Authenticated => self.keep_authenticated(merge).await?,
            KeepOption::Anonymous => self.keep_anonymous(merge).await?,
        };

        self.repository.delete(merge.session_id).await?;

        debug!(session_id = merge.session_id, "deleted session basket");

        span.record("offer_count", merged.len());
        span.record("contributed", contributed);

        info!(owner = merged.owner(), "merged baskets");

        Ok(merged)
    }
}

#[automock]
#[async_trait]
/// Basket merge operations.
pub trait BasketsService: Send + Sync {
    /// Reconcile the customer's and the session's baskets.
    ///
    /// The basket picked by the request's keep option survives, optionally
    /// taking the other basket's offers for gtins it lacks. The session
    /// basket is deleted on every successful path.
    ///
    /// # Errors
    ///
    /// Returns [`BasketsServiceError::InvalidArgument`] before touching
    /// storage when the request is incomplete,
    /// [`BasketsServiceError::NotFound`] when a basket the merge needs is
    /// missing, and [`BasketsServiceError::Storage`] when the store fails.
    async fn merge_baskets(&self, request: MergeRequest) -> Result<Basket, BasketsServiceError>;
}
