//! News service - publishing and listing news items.

use std::sync::Arc;

use crate::domain::news::{NewNewsItem, NewsItem};
use crate::ports::{CoreError, NewsRepository, RepositoryError, SettingsRepository};

/// Service for publishing and reading news items.
pub struct NewsService {
    news: Arc<dyn NewsRepository>,
    settings: Arc<dyn SettingsRepository>,
}

impl NewsService {
    /// Create a new news service.
    pub fn new(news: Arc<dyn NewsRepository>, settings: Arc<dyn SettingsRepository>) -> Self {
        Self { news, settings }
    }

    /// News items for the home page: newest first, capped at the
    /// configured page size.
    pub async fn home_page(&self) -> Result<Vec<NewsItem>, CoreError> {
        let settings = self.settings.load().await?;
        let limit = settings.effective_home_page_size();
        Ok(self.news.list_recent(limit).await?)
    }

    /// The most recent news items with an explicit cap, for callers that
    /// don't page (e.g. the CLI listing).
    pub async fn recent(&self, limit: u32) -> Result<Vec<NewsItem>, CoreError> {
        Ok(self.news.list_recent(limit).await?)
    }

    /// Get a single news item by id.
    pub async fn get(&self, id: i64) -> Result<NewsItem, CoreError> {
        self.news
            .get(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("news item {id}")).into())
    }

    /// Publish a news item.
    pub async fn publish(&self, item: NewNewsItem) -> Result<NewsItem, CoreError> {
        if item.title.trim().is_empty() {
            return Err(CoreError::Validation("title cannot be empty".into()));
        }
        let id = self.news.insert(item).await?;
        self.get(id).await
    }

    /// Total number of published news items.
    pub async fn count(&self) -> Result<i64, CoreError> {
        Ok(self.news.count().await?)
    }
}
