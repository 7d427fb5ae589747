//! Comment service - creating, listing and moderating comments.
//!
//! All author-facing operations go through the author-scoped fetch, so a
//! comment owned by someone else is indistinguishable from a missing one.

use std::sync::Arc;

use crate::domain::comment::{Comment, CommentUpdate, NewComment};
use crate::ports::{CommentRepository, CoreError, NewsRepository, RepositoryError};

/// Maximum accepted comment length, in characters.
pub const MAX_COMMENT_LEN: usize = 2000;

/// Service for comments under news items.
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    news: Arc<dyn NewsRepository>,
}

impl CommentService {
    /// Create a new comment service.
    pub fn new(comments: Arc<dyn CommentRepository>, news: Arc<dyn NewsRepository>) -> Self {
        Self { comments, news }
    }

    /// Create a comment on a news item for the given author.
    pub async fn create(
        &self,
        author_id: i64,
        news_id: i64,
        text: String,
    ) -> Result<Comment, CoreError> {
        validate_text(&text)?;
        if self.news.get(news_id).await?.is_none() {
            return Err(RepositoryError::NotFound(format!("news item {news_id}")).into());
        }

        let id = self
            .comments
            .insert(NewComment {
                news_id,
                author_id,
                text,
            })
            .await?;

        self.comments
            .get(id)
            .await?
            .ok_or_else(|| CoreError::Internal(format!("comment {id} vanished after insert")))
    }

    /// All comments for a news item, oldest first.
    pub async fn list_for_news(&self, news_id: i64) -> Result<Vec<Comment>, CoreError> {
        Ok(self.comments.list_for_news(news_id).await?)
    }

    /// Fetch a comment as seen by `author_id`.
    ///
    /// A comment owned by someone else reads as missing.
    pub async fn get_owned(&self, id: i64, author_id: i64) -> Result<Comment, CoreError> {
        self.comments
            .get_for_author(id, author_id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("comment {id}")).into())
    }

    /// Edit a comment the author owns.
    pub async fn edit(&self, id: i64, author_id: i64, text: String) -> Result<Comment, CoreError> {
        validate_text(&text)?;
        self.get_owned(id, author_id).await?;
        self.comments
            .update(id, CommentUpdate { text: Some(text) })
            .await?;
        self.get_owned(id, author_id).await
    }

    /// Delete a comment the author owns.
    pub async fn remove(&self, id: i64, author_id: i64) -> Result<(), CoreError> {
        self.get_owned(id, author_id).await?;
        self.comments.delete(id).await?;
        Ok(())
    }
}

fn validate_text(text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation("comment text cannot be empty".into()));
    }
    if text.chars().count() > MAX_COMMENT_LEN {
        return Err(CoreError::Validation(format!(
            "comment text exceeds {MAX_COMMENT_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::news::{NewNewsItem, NewsItem};
    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::sync::Mutex;

    struct MockCommentRepo {
        comments: Mutex<Vec<Comment>>,
    }

    impl MockCommentRepo {
        fn new() -> Self {
            Self {
                comments: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CommentRepository for MockCommentRepo {
        async fn insert(&self, comment: NewComment) -> Result<i64, RepositoryError> {
            let mut comments = self.comments.lock().unwrap();
            let id = comments.len() as i64 + 1;
            comments.push(Comment {
                id,
                news_id: comment.news_id,
                author_id: comment.author_id,
                text: comment.text,
                created: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            });
            Ok(id)
        }

        async fn get(&self, id: i64) -> Result<Option<Comment>, RepositoryError> {
            Ok(self
                .comments
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == id)
                .cloned())
        }

        async fn get_for_author(
            &self,
            id: i64,
            author_id: i64,
        ) -> Result<Option<Comment>, RepositoryError> {
            Ok(self
                .comments
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == id && c.author_id == author_id)
                .cloned())
        }

        async fn list_for_news(&self, news_id: i64) -> Result<Vec<Comment>, RepositoryError> {
            let mut list: Vec<Comment> = self
                .comments
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.news_id == news_id)
                .cloned()
                .collect();
            list.sort_by_key(|c| c.created);
            Ok(list)
        }

        async fn update(&self, id: i64, update: CommentUpdate) -> Result<(), RepositoryError> {
            let mut comments = self.comments.lock().unwrap();
            let comment = comments
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| RepositoryError::NotFound(format!("comment {id}")))?;
            if let Some(text) = update.text {
                comment.text = text;
            }
            Ok(())
        }

        async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
            self.comments.lock().unwrap().retain(|c| c.id != id);
            Ok(())
        }
    }

    struct MockNewsRepo {
        existing_id: i64,
    }

    #[async_trait]
    impl NewsRepository for MockNewsRepo {
        async fn insert(&self, _item: NewNewsItem) -> Result<i64, RepositoryError> {
            unimplemented!("not used in comment tests")
        }

        async fn get(&self, id: i64) -> Result<Option<NewsItem>, RepositoryError> {
            if id == self.existing_id {
                Ok(Some(NewsItem {
                    id,
                    title: "Title".into(),
                    text: "Text".into(),
                    date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                }))
            } else {
                Ok(None)
            }
        }

        async fn list_recent(&self, _limit: u32) -> Result<Vec<NewsItem>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn count(&self) -> Result<i64, RepositoryError> {
            Ok(1)
        }
    }

    fn service() -> CommentService {
        CommentService::new(
            Arc::new(MockCommentRepo::new()),
            Arc::new(MockNewsRepo { existing_id: 1 }),
        )
    }

    #[tokio::test]
    async fn create_then_get_owned() {
        let service = service();
        let comment = service.create(7, 1, "First!".into()).await.unwrap();

        let fetched = service.get_owned(comment.id, 7).await.unwrap();
        assert_eq!(fetched.text, "First!");
        assert_eq!(fetched.author_id, 7);
    }

    #[tokio::test]
    async fn foreign_comment_reads_as_missing() {
        let service = service();
        let comment = service.create(7, 1, "Mine".into()).await.unwrap();

        let err = service.get_owned(comment.id, 8).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn edit_by_non_author_changes_nothing() {
        let service = service();
        let comment = service.create(7, 1, "Original".into()).await.unwrap();

        let err = service
            .edit(comment.id, 8, "Hijacked".into())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::NotFound(_))
        ));

        let untouched = service.get_owned(comment.id, 7).await.unwrap();
        assert_eq!(untouched.text, "Original");
    }

    #[tokio::test]
    async fn remove_by_author_deletes() {
        let service = service();
        let comment = service.create(7, 1, "Delete me".into()).await.unwrap();

        service.remove(comment.id, 7).await.unwrap();

        let err = service.get_owned(comment.id, 7).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn comment_on_missing_news_is_rejected() {
        let service = service();
        let err = service.create(7, 99, "Hello".into()).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn blank_text_is_rejected() {
        let service = service();
        let err = service.create(7, 1, "   ".into()).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn oversized_text_is_rejected() {
        let service = service();
        let text = "x".repeat(MAX_COMMENT_LEN + 1);
        let err = service.create(7, 1, text).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
