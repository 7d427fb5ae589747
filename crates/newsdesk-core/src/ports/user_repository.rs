//! User repository port definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::user::User;

/// Port for user account persistence.
///
/// Password hashes cross this boundary as opaque strings; hashing and
/// verification happen in `AuthService`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return its id.
    ///
    /// Implementations surface a duplicate username as
    /// `RepositoryError::AlreadyExists`.
    async fn insert(&self, username: &str, password_hash: &str) -> Result<i64, RepositoryError>;

    /// Get a user by id.
    async fn get(&self, id: i64) -> Result<Option<User>, RepositoryError>;

    /// Get a user by username.
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Get the stored password hash for a username.
    async fn password_hash(&self, username: &str) -> Result<Option<String>, RepositoryError>;
}
