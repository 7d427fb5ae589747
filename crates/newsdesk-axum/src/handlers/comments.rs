//! Comment handlers: creation, edit and delete.
//!
//! Edit and delete go through the author-scoped service calls, so a
//! comment owned by someone else answers 404 rather than 403. Anonymous
//! requests never reach these handlers; `RequireUser` redirects them to
//! login first.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use newsdesk_core::Comment;

use crate::dto::{CommentDeletePage, CommentEditPage, CommentForm, CommentRequest};
use crate::error::HttpError;
use crate::extract::RequireUser;
use crate::routes::paths;
use crate::state::AppState;

/// Post a new comment under a news item.
pub async fn create(
    State(state): State<AppState>,
    Path(news_id): Path<i64>,
    RequireUser(user): RequireUser,
    Json(req): Json<CommentRequest>,
) -> Result<(StatusCode, Json<Comment>), HttpError> {
    let comment = state
        .core
        .comments()
        .create(user.id, news_id, req.text)
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// Edit page for a comment, prefilled with its current text.
pub async fn edit_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    RequireUser(user): RequireUser,
) -> Result<Json<CommentEditPage>, HttpError> {
    let comment = state.core.comments().get_owned(id, user.id).await?;
    let form = CommentForm::for_edit(&comment);
    Ok(Json(CommentEditPage { comment, form }))
}

/// Apply an edit to a comment.
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    RequireUser(user): RequireUser,
    Json(req): Json<CommentRequest>,
) -> Result<Json<Comment>, HttpError> {
    let comment = state.core.comments().edit(id, user.id, req.text).await?;
    Ok(Json(comment))
}

/// Delete confirmation page for a comment.
pub async fn delete_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    RequireUser(user): RequireUser,
) -> Result<Json<CommentDeletePage>, HttpError> {
    let comment = state.core.comments().get_owned(id, user.id).await?;
    Ok(Json(CommentDeletePage {
        confirm_action: paths::delete(comment.id),
        comment,
    }))
}

/// Delete a comment.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    RequireUser(user): RequireUser,
) -> Result<StatusCode, HttpError> {
    state.core.comments().remove(id, user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
