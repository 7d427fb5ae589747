//! Route availability and access control.
//!
//! Public pages must answer 200 to anonymous requests. Comment edit and
//! delete answer 200 only to the owning author; any other authenticated
//! user sees 404, and anonymous visitors are redirected to login with
//! the original URL in the `next` parameter.

mod common;

use axum::http::{StatusCode, header};
use newsdesk_axum::paths;

use common::{TestApp, comment, news_item, signup};

#[tokio::test]
async fn public_pages_are_available() {
    let app = TestApp::new().await;
    let news_id = news_item(&app).await;

    let urls = [
        ("home", paths::home()),
        ("detail", paths::detail(news_id)),
        ("login", paths::login()),
        ("signup", paths::signup()),
    ];

    for (name, url) in urls {
        let response = app.get(&url).await;
        assert_eq!(
            response.status(),
            StatusCode::OK,
            "page {name} unavailable - status {}",
            response.status()
        );
    }
}

#[tokio::test]
async fn edit_and_delete_answer_by_authorship() {
    let app = TestApp::new().await;
    let news_id = news_item(&app).await;
    let (author_id, author_token) = signup(&app, "tolstoy").await;
    let (_, reader_token) = signup(&app, "reader").await;
    let comment_id = comment(&app, news_id, author_id).await;

    let cases = [
        ("author", &author_token, StatusCode::OK),
        ("reader", &reader_token, StatusCode::NOT_FOUND),
    ];

    for (who, token, expected) in cases {
        for url in [paths::edit(comment_id), paths::delete(comment_id)] {
            let response = app.get_as(&url, token).await;
            assert_eq!(
                response.status(),
                expected,
                "{who} got wrong status for {url}: {}, expected {expected}",
                response.status()
            );
        }
    }
}

#[tokio::test]
async fn anonymous_visitors_are_redirected_to_login() {
    let app = TestApp::new().await;
    let news_id = news_item(&app).await;
    let (author_id, _) = signup(&app, "tolstoy").await;
    let comment_id = comment(&app, news_id, author_id).await;

    for url in [paths::edit(comment_id), paths::delete(comment_id)] {
        let response = app.get(&url).await;

        assert_eq!(
            response.status(),
            StatusCode::FOUND,
            "expected a redirect for anonymous access to {url}"
        );

        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert_eq!(
            location,
            paths::login_with_next(&url),
            "wrong redirect target for {url}"
        );
    }
}

#[tokio::test]
async fn missing_news_item_is_not_found() {
    let app = TestApp::new().await;
    let response = app.get(&paths::detail(9999)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
