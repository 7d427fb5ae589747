//! Page context DTOs.
//!
//! Each GET route serves one of these as its JSON body. The comment form
//! descriptor appears in a detail context only for authenticated
//! visitors; its absence is how anonymous visitors learn they cannot
//! post.

use newsdesk_core::{Comment, NewsItem};
use newsdesk_core::services::MAX_COMMENT_LEN;
use serde::{Deserialize, Serialize};

use crate::routes::paths;

/// Home page context: recent news, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomePage {
    pub items: Vec<NewsItem>,
}

/// Detail page context for a single news item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsDetailPage {
    pub news: NewsItem,
    /// Comments oldest first.
    pub comments: Vec<Comment>,
    /// Present only for authenticated visitors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<CommentForm>,
}

/// Descriptor of the comment submission/edit form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentForm {
    /// POST target for the form.
    pub action: String,
    pub text_max_length: usize,
    /// Prefilled text when editing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_text: Option<String>,
}

impl CommentForm {
    /// Form for posting a new comment under a news item.
    #[must_use]
    pub fn for_news(news_id: i64) -> Self {
        Self {
            action: paths::comments(news_id),
            text_max_length: MAX_COMMENT_LEN,
            initial_text: None,
        }
    }

    /// Form for editing an existing comment, prefilled with its text.
    #[must_use]
    pub fn for_edit(comment: &Comment) -> Self {
        Self {
            action: paths::edit(comment.id),
            text_max_length: MAX_COMMENT_LEN,
            initial_text: Some(comment.text.clone()),
        }
    }
}

/// Edit page context for a comment, served to its author only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentEditPage {
    pub comment: Comment,
    pub form: CommentForm,
}

/// Delete confirmation context for a comment, served to its author only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDeletePage {
    pub comment: Comment,
    /// POST target that performs the deletion.
    pub confirm_action: String,
}

/// Descriptor of a credentials form (login/signup).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthForm {
    pub action: String,
    pub fields: Vec<String>,
}

impl AuthForm {
    fn credentials(action: String) -> Self {
        Self {
            action,
            fields: vec!["username".into(), "password".into()],
        }
    }
}

/// Login page context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginPage {
    pub form: AuthForm,
}

impl LoginPage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: AuthForm::credentials(paths::login()),
        }
    }
}

impl Default for LoginPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Signup page context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupPage {
    pub form: AuthForm,
}

impl SignupPage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: AuthForm::credentials(paths::signup()),
        }
    }
}

impl Default for SignupPage {
    fn default() -> Self {
        Self::new()
    }
}
