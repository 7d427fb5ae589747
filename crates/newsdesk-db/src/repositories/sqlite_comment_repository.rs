//! `SQLite` implementation of the `CommentRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use newsdesk_core::domain::comment::{Comment, CommentUpdate, NewComment};
use newsdesk_core::ports::{CommentRepository, RepositoryError};

use super::row_mappers::row_to_comment;

const COMMENT_COLUMNS: &str = "id, news_id, author_id, text, created";

/// `SQLite` implementation of the `CommentRepository` trait.
pub struct SqliteCommentRepository {
    pool: SqlitePool,
}

impl SqliteCommentRepository {
    /// Create a new `SQLite` comment repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn insert(&self, comment: NewComment) -> Result<i64, RepositoryError> {
        let result = sqlx::query("INSERT INTO comments (news_id, author_id, text) VALUES (?, ?, ?)")
            .bind(comment.news_id)
            .bind(comment.author_id)
            .bind(&comment.text)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(result.last_insert_rowid())
    }

    async fn get(&self, id: i64) -> Result<Option<Comment>, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row.as_ref().map(row_to_comment).transpose()
    }

    async fn get_for_author(
        &self,
        id: i64,
        author_id: i64,
    ) -> Result<Option<Comment>, RepositoryError> {
        // Author scoping happens in the query itself; a foreign comment
        // produces the same empty result as a missing one.
        let row = sqlx::query(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = ? AND author_id = ?"
        ))
        .bind(id)
        .bind(author_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row.as_ref().map(row_to_comment).transpose()
    }

    async fn list_for_news(&self, news_id: i64) -> Result<Vec<Comment>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE news_id = ?
             ORDER BY created ASC, id ASC"
        ))
        .bind(news_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_comment).collect()
    }

    async fn update(&self, id: i64, update: CommentUpdate) -> Result<(), RepositoryError> {
        let Some(text) = update.text else {
            return Ok(());
        };

        let result = sqlx::query("UPDATE comments SET text = ? WHERE id = ?")
            .bind(&text)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("comment {id}")));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{SqliteNewsRepository, SqliteUserRepository};
    use crate::setup::setup_test_database;
    use newsdesk_core::domain::news::NewNewsItem;
    use newsdesk_core::ports::{NewsRepository, UserRepository};

    async fn fixture(pool: &SqlitePool) -> (i64, i64) {
        let news_id = SqliteNewsRepository::new(pool.clone())
            .insert(NewNewsItem {
                title: "Headline".into(),
                text: "Just text.".into(),
                date: None,
            })
            .await
            .unwrap();
        let author_id = SqliteUserRepository::new(pool.clone())
            .insert("commenter", "salt$hash")
            .await
            .unwrap();
        (news_id, author_id)
    }

    #[tokio::test]
    async fn insert_stamps_creation_time() {
        let pool = setup_test_database().await.unwrap();
        let (news_id, author_id) = fixture(&pool).await;
        let repo = SqliteCommentRepository::new(pool);

        let id = repo
            .insert(NewComment {
                news_id,
                author_id,
                text: "First!".into(),
            })
            .await
            .unwrap();

        let comment = repo.get(id).await.unwrap().unwrap();
        assert_eq!(comment.text, "First!");
        // datetime('now') stamps are close to the wall clock
        let age = chrono::Utc::now() - comment.created;
        assert!(age.num_minutes() < 5, "created stamp too old: {age}");
    }

    #[tokio::test]
    async fn author_scoped_fetch_hides_foreign_comments() {
        let pool = setup_test_database().await.unwrap();
        let (news_id, author_id) = fixture(&pool).await;
        let repo = SqliteCommentRepository::new(pool);

        let id = repo
            .insert(NewComment {
                news_id,
                author_id,
                text: "Mine".into(),
            })
            .await
            .unwrap();

        assert!(repo.get_for_author(id, author_id).await.unwrap().is_some());
        assert!(repo.get_for_author(id, author_id + 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn listing_orders_by_creation_time_ascending() {
        let pool = setup_test_database().await.unwrap();
        let (news_id, author_id) = fixture(&pool).await;
        let repo = SqliteCommentRepository::new(pool.clone());

        let mut ids = Vec::new();
        for n in 0..3 {
            let id = repo
                .insert(NewComment {
                    news_id,
                    author_id,
                    text: format!("Comment {n}"),
                })
                .await
                .unwrap();
            ids.push(id);
        }

        // Backdate the first comment forward past the others, the way the
        // integration fixtures stagger timestamps.
        sqlx::query("UPDATE comments SET created = datetime('now', '+3 days') WHERE id = ?")
            .bind(ids[0])
            .execute(&pool)
            .await
            .unwrap();

        let listed = repo.list_for_news(news_id).await.unwrap();
        let listed_ids: Vec<_> = listed.iter().map(|c| c.id).collect();
        assert_eq!(listed_ids, vec![ids[1], ids[2], ids[0]]);

        let timestamps: Vec<_> = listed.iter().map(|c| c.created).collect();
        let mut sorted = timestamps.clone();
        sorted.sort();
        assert_eq!(timestamps, sorted);
    }

    #[tokio::test]
    async fn update_missing_comment_is_not_found() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteCommentRepository::new(pool);

        let err = repo
            .update(
                999,
                CommentUpdate {
                    text: Some("nope".into()),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }
}
