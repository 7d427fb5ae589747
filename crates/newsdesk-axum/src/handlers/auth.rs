//! Auth handlers: signup, login, logout and their form pages.

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header::AUTHORIZATION};
use axum::http::HeaderMap;
use newsdesk_core::NewUser;

use crate::dto::{AuthResponse, CredentialsRequest, LoginPage, SignupPage};
use crate::error::HttpError;
use crate::state::AppState;

/// Login form page.
pub async fn login_page() -> Json<LoginPage> {
    Json(LoginPage::new())
}

/// Authenticate and open a session.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>, HttpError> {
    let (user, session) = state.core.auth().login(&req.username, &req.password).await?;
    Ok(Json(AuthResponse {
        token: session.token,
        user,
    }))
}

/// Signup form page.
pub async fn signup_page() -> Json<SignupPage> {
    Json(SignupPage::new())
}

/// Register a new user and open a session for them.
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>, HttpError> {
    let (user, session) = state
        .core
        .auth()
        .signup(NewUser {
            username: req.username,
            password: req.password,
        })
        .await?;
    Ok(Json(AuthResponse {
        token: session.token,
        user,
    }))
}

/// Close the presented session.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, HttpError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| HttpError::Unauthorized("missing bearer token".into()))?;

    state.core.auth().logout(token).await?;
    Ok(StatusCode::NO_CONTENT)
}
