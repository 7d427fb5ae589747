//! `SQLite` implementation of the `SessionRepository` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use newsdesk_core::domain::user::Session;
use newsdesk_core::ports::{RepositoryError, SessionRepository};

use super::row_mappers::{DATETIME_FORMAT, parse_datetime};

/// `SQLite` implementation of the `SessionRepository` trait.
pub struct SqliteSessionRepository {
    pool: SqlitePool,
}

impl SqliteSessionRepository {
    /// Create a new `SQLite` session repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn insert(&self, session: &Session) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO sessions (token, user_id, created_at) VALUES (?, ?, ?)")
            .bind(&session.token)
            .bind(session.user_id)
            .bind(session.created_at.format(DATETIME_FORMAT).to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<Session>, RepositoryError> {
        let row = sqlx::query("SELECT token, user_id, created_at FROM sessions WHERE token = ?")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row.map(|r| {
            let created_at: String = r.get("created_at");
            Ok(Session {
                token: r.get("token"),
                user_id: r.get("user_id"),
                created_at: parse_datetime(&created_at)?,
            })
        })
        .transpose()
    }

    async fn delete(&self, token: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::SqliteUserRepository;
    use crate::setup::setup_test_database;
    use chrono::{Timelike, Utc};
    use newsdesk_core::ports::UserRepository;

    #[tokio::test]
    async fn session_round_trip_and_delete() {
        let pool = setup_test_database().await.unwrap();
        let user_id = SqliteUserRepository::new(pool.clone())
            .insert("tolstoy", "salt$hash")
            .await
            .unwrap();
        let repo = SqliteSessionRepository::new(pool);

        let session = Session {
            token: "tok-1".into(),
            user_id,
            // Storage keeps whole seconds
            created_at: Utc::now().with_nanosecond(0).unwrap(),
        };
        repo.insert(&session).await.unwrap();

        let loaded = repo.get("tok-1").await.unwrap().unwrap();
        assert_eq!(loaded.user_id, user_id);
        assert_eq!(loaded.created_at, session.created_at);

        repo.delete("tok-1").await.unwrap();
        assert!(repo.get("tok-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleting_unknown_token_is_ok() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteSessionRepository::new(pool);
        repo.delete("missing").await.unwrap();
    }
}
