//! Comment domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment attached to a news item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub news_id: i64,
    pub author_id: i64,
    pub text: String,
    /// Creation timestamp. Comments under a news item are listed oldest
    /// first.
    pub created: DateTime<Utc>,
}

/// Data for creating a new comment.
///
/// The creation timestamp is stamped by storage.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub news_id: i64,
    pub author_id: i64,
    pub text: String,
}

/// Data for editing an existing comment.
#[derive(Debug, Clone, Default)]
pub struct CommentUpdate {
    /// New comment text; `None` leaves the text unchanged.
    pub text: Option<String>,
}
