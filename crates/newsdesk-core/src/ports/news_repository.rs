//! News repository port definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::news::{NewNewsItem, NewsItem};

/// Port for news item persistence.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Insert a news item and return its id.
    ///
    /// When `item.date` is `None` the implementation stamps today's date.
    async fn insert(&self, item: NewNewsItem) -> Result<i64, RepositoryError>;

    /// Get a news item by id.
    async fn get(&self, id: i64) -> Result<Option<NewsItem>, RepositoryError>;

    /// List the most recent news items, newest first, capped at `limit`.
    async fn list_recent(&self, limit: u32) -> Result<Vec<NewsItem>, RepositoryError>;

    /// Total number of stored news items.
    async fn count(&self) -> Result<i64, RepositoryError>;
}
