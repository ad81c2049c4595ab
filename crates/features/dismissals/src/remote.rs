use crate::error::DismissalError;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Body of the dismiss-item call: `{"data":{"slug":…,"expiration":…}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DismissItemRequest {
    pub data: DismissItemData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DismissItemData {
    pub slug: String,
    /// Seconds, `0` = permanent.
    pub expiration: u64,
}

impl DismissItemRequest {
    #[must_use]
    pub fn new(slug: impl Into<String>, expiration: u64) -> Self {
        Self { data: DismissItemData { slug: slug.into(), expiration } }
    }
}

/// Remote dismissed-items store.
///
/// Both calls answer with the full list of dismissed ids as the server sees it.
/// Errors should use [`DismissalError::Remote`].
pub trait DismissalRemote: Send + Sync + 'static {
    /// `GET core/user/data/dismissed-items`
    fn fetch_dismissed_items(
        &self,
    ) -> impl Future<Output = Result<Vec<String>, DismissalError>> + Send;

    /// `POST core/user/data/dismiss-item`
    fn dismiss_item(
        &self,
        request: DismissItemRequest,
    ) -> impl Future<Output = Result<Vec<String>, DismissalError>> + Send;
}
