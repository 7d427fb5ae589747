//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use newsdesk_core::Repos;
use newsdesk_core::services::AppCore;

use crate::repositories::{
    SqliteCommentRepository, SqliteNewsRepository, SqliteSessionRepository,
    SqliteSettingsRepository, SqliteUserRepository,
};

/// Factory for creating repository instances with `SQLite` backends.
///
/// This struct provides composition utilities only - no domain logic.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    /// Returns a `Repos` struct from `newsdesk-core` containing
    /// trait-object-wrapped repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteNewsRepository::new(pool.clone())),
            Arc::new(SqliteCommentRepository::new(pool.clone())),
            Arc::new(SqliteUserRepository::new(pool.clone())),
            Arc::new(SqliteSessionRepository::new(pool.clone())),
            Arc::new(SqliteSettingsRepository::new(pool)),
        )
    }

    /// Build a complete `AppCore` instance from a pool.
    ///
    /// Equivalent to `AppCore::new(CoreFactory::build_repos(pool))`.
    pub fn build_app_core(pool: SqlitePool) -> AppCore {
        AppCore::new(Self::build_repos(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the full production
/// schema already applied. The raw pool stays accessible so fixtures can
/// rewrite row timestamps after creation.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Access the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Rewrite a comment's creation timestamp.
    ///
    /// Integration fixtures stagger timestamps after creation so that
    /// listing order provably comes from the queries, not from insertion
    /// order.
    pub async fn set_comment_created(
        &self,
        id: i64,
        created: chrono::DateTime<chrono::Utc>,
    ) -> anyhow::Result<()> {
        sqlx::query("UPDATE comments SET created = ? WHERE id = ?")
            .bind(
                created
                    .format(crate::repositories::row_mappers::DATETIME_FORMAT)
                    .to_string(),
            )
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Rewrite a news item's publication date.
    pub async fn set_news_date(&self, id: i64, date: chrono::NaiveDate) -> anyhow::Result<()> {
        sqlx::query("UPDATE news SET date = ? WHERE id = ?")
            .bind(
                date.format(crate::repositories::row_mappers::DATE_FORMAT)
                    .to_string(),
            )
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Build repositories over this database.
    pub fn repos(&self) -> Repos {
        CoreFactory::build_repos(self.pool.clone())
    }

    /// Build an `AppCore` over this database.
    pub fn app_core(&self) -> AppCore {
        CoreFactory::build_app_core(self.pool.clone())
    }
}
