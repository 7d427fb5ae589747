//! User and login session domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user.
///
/// The stored password hash never leaves the storage layer, so this type
/// is safe to serialize into page contexts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Data for registering a new user.
///
/// Carries the plaintext password only between the adapter and
/// `AuthService`; it is hashed before it reaches any port.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

/// A login session identified by a bearer token.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}
