//! Basket Merge Data

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::baskets::errors::BasketsServiceError;

/// Which basket's identity and content survive a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepOption {
    /// Keep the basket stored under the customer id.
    Authenticated,

    /// Keep the basket stored under the session id, re-keyed to the customer.
    Anonymous,
}

impl KeepOption {
    /// Stable name used in logs and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Authenticated => "authenticated",
            Self::Anonymous => "anonymous",
        }
    }
}

impl Display for KeepOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Merge Request Data
///
/// Fields arrive unvalidated from the caller; [`MergeRequest::validate`]
/// checks them before any storage access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    /// Authenticated customer id.
    pub customer_id: String,

    /// Anonymous session id.
    pub session_id: String,

    /// Which basket survives.
    pub keep: Option<KeepOption>,

    /// Union the other basket's offers into the kept one.
    pub merge_offers: bool,
}

/// A merge request whose preconditions hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ValidatedMerge<'a> {
    pub(crate) customer_id: &'a str,
    pub(crate) session_id: &'a str,
    pub(crate) keep: KeepOption,
    pub(crate) merge_offers: bool,
}

impl MergeRequest {
    /// Check the request's preconditions.
    ///
    /// Ids consisting only of whitespace count as empty. The two ids must
    /// differ, since the session basket is deleted after the kept basket is
    /// saved under the customer id.
    ///
    /// # Errors
    ///
    /// Returns [`BasketsServiceError::InvalidArgument`] when either id is
    /// empty, both ids are the same, or no keep option was given.
    pub(crate) fn validate(&self) -> Result<ValidatedMerge<'_>, BasketsServiceError> {
        if self.customer_id.trim().is_empty() {
            return Err(BasketsServiceError::InvalidArgument(
                "customer id must not be empty",
            ));
        }

        if self.session_id.trim().is_empty() {
            return Err(BasketsServiceError::InvalidArgument(
                "session id must not be empty",
            ));
        }

        if self.customer_id == self.session_id {
            return Err(BasketsServiceError::InvalidArgument(
                "customer id and session id must differ",
            ));
        }

        let keep = self.keep.ok_or(BasketsServiceError::InvalidArgument(
            "keep option must be set",
        ))?;

        Ok(ValidatedMerge {
            customer_id: &self.customer_id,
            session_id: &self.session_id,
            keep,
            merge_offers: self.merge_offers,
        })
    }
}
