//! News page handlers.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::{CommentForm, HomePage, NewsDetailPage};
use crate::error::HttpError;
use crate::extract::CurrentUser;
use crate::state::AppState;

/// Home page: recent news, newest first, capped at the configured page
/// size.
pub async fn home(State(state): State<AppState>) -> Result<Json<HomePage>, HttpError> {
    let items = state.core.news().home_page().await?;
    Ok(Json(HomePage { items }))
}

/// Detail page for one news item with its comments, oldest first.
///
/// Authenticated visitors also get the comment form; anonymous visitors
/// get a context without a `form` key.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<NewsDetailPage>, HttpError> {
    let news = state.core.news().get(id).await?;
    let comments = state.core.comments().list_for_news(id).await?;
    let form = user.map(|_| CommentForm::for_news(id));

    Ok(Json(NewsDetailPage {
        news,
        comments,
        form,
    }))
}
