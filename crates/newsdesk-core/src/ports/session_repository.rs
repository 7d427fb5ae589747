//! Login session repository port definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::user::Session;

/// Port for login session persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Store a new session.
    async fn insert(&self, session: &Session) -> Result<(), RepositoryError>;

    /// Look up a session by its token.
    async fn get(&self, token: &str) -> Result<Option<Session>, RepositoryError>;

    /// Delete a session. Deleting an unknown token is not an error.
    async fn delete(&self, token: &str) -> Result<(), RepositoryError>;
}
