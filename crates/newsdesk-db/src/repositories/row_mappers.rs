//! Row mapping helpers for `SQLite` queries.
//!
//! Timestamps are stored as `SQLite` text (`datetime('now')` /
//! `date('now')` defaults), so mapping parses them explicitly instead of
//! relying on driver-level decoding.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use newsdesk_core::{Comment, NewsItem, RepositoryError, User};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Storage format for timestamps, matching `datetime('now')`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Storage format for dates, matching `date('now')`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a stored timestamp, with or without fractional seconds.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        .map_err(|e| RepositoryError::Serialization(format!("bad timestamp {s:?}: {e}")))
}

/// Parse a stored date.
pub fn parse_date(s: &str) -> Result<NaiveDate, RepositoryError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| RepositoryError::Serialization(format!("bad date {s:?}: {e}")))
}

/// Parse a database row into a `NewsItem`.
pub fn row_to_news(row: &SqliteRow) -> Result<NewsItem, RepositoryError> {
    let date_str: String = row
        .try_get("date")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    Ok(NewsItem {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        title: row
            .try_get("title")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        text: row
            .try_get("text")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        date: parse_date(&date_str)?,
    })
}

/// Parse a database row into a `Comment`.
pub fn row_to_comment(row: &SqliteRow) -> Result<Comment, RepositoryError> {
    let created_str: String = row
        .try_get("created")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    Ok(Comment {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        news_id: row
            .try_get("news_id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        author_id: row
            .try_get("author_id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        text: row
            .try_get("text")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        created: parse_datetime(&created_str)?,
    })
}

/// Parse a database row into a `User`.
pub fn row_to_user(row: &SqliteRow) -> Result<User, RepositoryError> {
    Ok(User {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        username: row
            .try_get("username")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
    })
}
