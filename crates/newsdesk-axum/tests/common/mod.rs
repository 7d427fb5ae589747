//! Shared fixtures for the integration suites.
//!
//! Every test gets a fresh in-memory database. Fixtures create entities
//! through the real services and then, where a test needs staggered
//! dates, rewrite the stored timestamps through the raw pool - listing
//! order must come from the queries, not from insertion order.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use newsdesk_axum::bootstrap::{AxumContext, CorsConfig};
use newsdesk_axum::paths;
use newsdesk_axum::routes::create_router;
use newsdesk_core::services::AppCore;
use newsdesk_core::{DEFAULT_HOME_PAGE_SIZE, NewNewsItem};
use newsdesk_db::TestDb;

/// A router over a fresh in-memory database, plus handles to reach
/// behind the HTTP layer.
pub struct TestApp {
    pub db: TestDb,
    pub core: Arc<AppCore>,
    pub router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = TestDb::new().await.expect("in-memory database");
        let core = Arc::new(db.app_core());
        let router = create_router(AxumContext::new(core.clone()), &CorsConfig::AllowAll);
        Self { db, core, router }
    }

    /// Anonymous GET.
    pub async fn get(&self, path: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Authenticated GET.
    pub async fn get_as(&self, path: &str, token: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(path)
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// POST a JSON body, optionally authenticated.
    pub async fn post_json(&self, path: &str, token: Option<&str>, body: &Value) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }
}

/// Collect a response body into JSON.
pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "response body is not JSON: {e}: {:?}",
            String::from_utf8_lossy(&bytes)
        )
    })
}

/// Register a user through the signup route, returning `(user_id, token)`.
pub async fn signup(app: &TestApp, username: &str) -> (i64, String) {
    let response = app
        .post_json(
            &paths::signup(),
            None,
            &json!({ "username": username, "password": format!("{username}-passphrase") }),
        )
        .await;
    assert_eq!(
        response.status(),
        StatusCode::OK,
        "signup for {username} failed"
    );

    let body = json_body(response).await;
    let user_id = body["user"]["id"].as_i64().expect("user id in signup body");
    let token = body["token"].as_str().expect("token in signup body").to_owned();
    (user_id, token)
}

/// One news item, dated today.
pub async fn news_item(app: &TestApp) -> i64 {
    app.core
        .news()
        .publish(NewNewsItem {
            title: "Test news".into(),
            text: "Just text.".into(),
            date: None,
        })
        .await
        .expect("publish news")
        .id
}

/// A full home page worth of news plus one extra, with dates staggered
/// one day apart (item N dated N days ago).
pub async fn news_list(app: &TestApp) -> Vec<i64> {
    let today = Utc::now().date_naive();
    let mut ids = Vec::new();
    for index in 0..=i64::from(DEFAULT_HOME_PAGE_SIZE) {
        let item = app
            .core
            .news()
            .publish(NewNewsItem {
                title: format!("News {index}"),
                text: "Just text.".into(),
                date: Some(today - Duration::days(index)),
            })
            .await
            .expect("publish news");
        ids.push(item.id);
    }
    ids
}

/// Ten comments on one news item with creation timestamps staggered one
/// day apart. Timestamps are rewritten after creation so listing order
/// provably comes from the query.
pub async fn comments(app: &TestApp, news_id: i64, author_id: i64) -> Vec<i64> {
    let now = Utc::now();
    let mut ids = Vec::new();
    for index in 0..10 {
        let comment = app
            .core
            .comments()
            .create(author_id, news_id, format!("Text {index}"))
            .await
            .expect("create comment");

        app.db
            .set_comment_created(comment.id, now + Duration::days(index))
            .await
            .expect("stagger comment timestamp");

        ids.push(comment.id);
    }
    ids
}

/// One comment owned by `author_id`.
pub async fn comment(app: &TestApp, news_id: i64, author_id: i64) -> i64 {
    app.core
        .comments()
        .create(author_id, news_id, "Comment text".into())
        .await
        .expect("create comment")
        .id
}
