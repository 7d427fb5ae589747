//! `SQLite` implementation of the `NewsRepository` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use newsdesk_core::domain::news::{NewNewsItem, NewsItem};
use newsdesk_core::ports::{NewsRepository, RepositoryError};

use super::row_mappers::{DATE_FORMAT, row_to_news};

/// `SQLite` implementation of the `NewsRepository` trait.
pub struct SqliteNewsRepository {
    pool: SqlitePool,
}

impl SqliteNewsRepository {
    /// Create a new `SQLite` news repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsRepository for SqliteNewsRepository {
    async fn insert(&self, item: NewNewsItem) -> Result<i64, RepositoryError> {
        let result = match item.date {
            Some(date) => {
                sqlx::query("INSERT INTO news (title, text, date) VALUES (?, ?, ?)")
                    .bind(&item.title)
                    .bind(&item.text)
                    .bind(date.format(DATE_FORMAT).to_string())
                    .execute(&self.pool)
                    .await
            }
            // Let the schema default stamp today's date
            None => {
                sqlx::query("INSERT INTO news (title, text) VALUES (?, ?)")
                    .bind(&item.title)
                    .bind(&item.text)
                    .execute(&self.pool)
                    .await
            }
        }
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(result.last_insert_rowid())
    }

    async fn get(&self, id: i64) -> Result<Option<NewsItem>, RepositoryError> {
        let row = sqlx::query("SELECT id, title, text, date FROM news WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row.as_ref().map(row_to_news).transpose()
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<NewsItem>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, title, text, date FROM news
             ORDER BY date DESC, id DESC
             LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_news).collect()
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM news")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(row.get("count"))
    }
}
