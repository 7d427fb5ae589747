//! Comment repository port definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::comment::{Comment, CommentUpdate, NewComment};

/// Port for comment persistence.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a comment and return its id. The creation timestamp is
    /// stamped by the implementation.
    async fn insert(&self, comment: NewComment) -> Result<i64, RepositoryError>;

    /// Get a comment by id.
    async fn get(&self, id: i64) -> Result<Option<Comment>, RepositoryError>;

    /// Get a comment by id, scoped to its author.
    ///
    /// Returns `None` both when the comment does not exist and when it
    /// belongs to a different author. Callers cannot distinguish the two
    /// cases, which is what keeps foreign comments invisible.
    async fn get_for_author(
        &self,
        id: i64,
        author_id: i64,
    ) -> Result<Option<Comment>, RepositoryError>;

    /// List all comments for a news item, oldest first.
    async fn list_for_news(&self, news_id: i64) -> Result<Vec<Comment>, RepositoryError>;

    /// Apply an update to a comment.
    async fn update(&self, id: i64, update: CommentUpdate) -> Result<(), RepositoryError>;

    /// Delete a comment.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
