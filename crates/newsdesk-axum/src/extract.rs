//! Authentication extractors.
//!
//! Two levels of identity:
//!
//! - [`CurrentUser`] resolves the bearer token if one is present; an
//!   absent, unknown or expired token reads as anonymous.
//! - [`RequireUser`] insists on a live session; anonymous requests are
//!   rejected with a `302 Found` to the login page carrying the
//!   originally requested URL in the `next` query parameter.

use axum::extract::FromRequestParts;
use axum::http::{StatusCode, header, request::Parts};
use axum::response::{IntoResponse, Response};
use newsdesk_core::User;

use crate::error::HttpError;
use crate::routes::paths;
use crate::state::AppState;

/// Pull the bearer token out of the Authorization header, if any.
pub(crate) fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Optional identity: `None` for anonymous visitors.
pub struct CurrentUser(pub Option<User>);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts) else {
            return Ok(Self(None));
        };
        let user = state.core.auth().authenticate(token).await?;
        Ok(Self(user))
    }
}

/// Required identity: anonymous requests get redirected to login.
pub struct RequireUser(pub User);

/// Rejection for [`RequireUser`].
pub enum RequireUserRejection {
    /// Anonymous request: redirect to the login page, preserving the
    /// originally requested URL.
    LoginRedirect { next: String },
    /// Session lookup failed for infrastructure reasons.
    Error(HttpError),
}

impl IntoResponse for RequireUserRejection {
    fn into_response(self) -> Response {
        match self {
            Self::LoginRedirect { next } => {
                let location = paths::login_with_next(&next);
                (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
            }
            Self::Error(err) => err.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = RequireUserRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let next = parts
            .uri
            .path_and_query()
            .map_or_else(|| parts.uri.path().to_owned(), |pq| pq.as_str().to_owned());

        let Some(token) = bearer_token(parts) else {
            return Err(RequireUserRejection::LoginRedirect { next });
        };

        match state.core.auth().authenticate(token).await {
            Ok(Some(user)) => Ok(Self(user)),
            // Stale token: same treatment as no token at all
            Ok(None) => Err(RequireUserRejection::LoginRedirect { next }),
            Err(e) => Err(RequireUserRejection::Error(e.into())),
        }
    }
}
