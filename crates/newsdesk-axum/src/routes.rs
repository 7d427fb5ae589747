//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router. The
//! `paths` module is the single source of truth for URL construction;
//! redirects and tests build URLs through it rather than with string
//! literals.

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Named route paths.
///
/// Mirrors the route table in [`page_routes`]; the router and every URL
/// producer go through these helpers.
pub mod paths {
    /// Home page listing recent news.
    #[must_use]
    pub fn home() -> String {
        "/".into()
    }

    /// Detail page for one news item.
    #[must_use]
    pub fn detail(news_id: i64) -> String {
        format!("/news/{news_id}")
    }

    /// Comment collection under a news item (POST target).
    #[must_use]
    pub fn comments(news_id: i64) -> String {
        format!("/news/{news_id}/comments")
    }

    /// Edit page / action for a comment.
    #[must_use]
    pub fn edit(comment_id: i64) -> String {
        format!("/comments/{comment_id}/edit")
    }

    /// Delete confirmation page / action for a comment.
    #[must_use]
    pub fn delete(comment_id: i64) -> String {
        format!("/comments/{comment_id}/delete")
    }

    /// Login page.
    #[must_use]
    pub fn login() -> String {
        "/auth/login".into()
    }

    /// Signup page.
    #[must_use]
    pub fn signup() -> String {
        "/auth/signup".into()
    }

    /// Logout action.
    #[must_use]
    pub fn logout() -> String {
        "/auth/logout".into()
    }

    /// Login page carrying the originally requested URL, the target of
    /// anonymous-access redirects.
    #[must_use]
    pub fn login_with_next(next: &str) -> String {
        format!("{}?next={next}", login())
    }
}

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all page routes.
///
/// Returns a router typed as `Router<AppState>` (state inferred from
/// handlers) but WITHOUT `.with_state()` applied; the caller applies the
/// state.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub(crate) fn page_routes() -> Router<AppState> {
    Router::new()
        // News pages
        .route("/", get(handlers::news::home))
        .route("/news/{id}", get(handlers::news::detail))
        // Comments
        .route("/news/{id}/comments", post(handlers::comments::create))
        .route(
            "/comments/{id}/edit",
            get(handlers::comments::edit_page).post(handlers::comments::edit),
        )
        .route(
            "/comments/{id}/delete",
            get(handlers::comments::delete_page).post(handlers::comments::delete),
        )
        // Auth pages
        .route(
            "/auth/login",
            get(handlers::auth::login_page).post(handlers::auth::login),
        )
        .route(
            "/auth/signup",
            get(handlers::auth::signup_page).post(handlers::auth::signup),
        )
        .route("/auth/logout", post(handlers::auth::logout))
}

/// Create the main Axum router with all routes.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .merge(page_routes().with_state(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
