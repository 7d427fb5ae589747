//! News item domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A published news item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    pub text: String,
    /// Publication date. The home page lists items newest first.
    pub date: NaiveDate,
}

/// Data for publishing a new news item.
#[derive(Debug, Clone)]
pub struct NewNewsItem {
    pub title: String,
    pub text: String,
    /// Publication date; `None` lets storage stamp today's date.
    pub date: Option<NaiveDate>,
}
