//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused for repositories
//! - Access policy lives in services, with one exception: the
//!   author-scoped comment fetch, which exists at the port level so that
//!   handlers can never observe a foreign comment at all

pub mod comment_repository;
pub mod news_repository;
pub mod session_repository;
pub mod settings_repository;
pub mod user_repository;

use std::sync::Arc;
use thiserror::Error;

// Re-export repository traits for convenience
pub use comment_repository::CommentRepository;
pub use news_repository::NewsRepository;
pub use session_repository::SessionRepository;
pub use settings_repository::SettingsRepository;
pub use user_repository::UserRepository;

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across
/// adapters without coupling them to concrete implementations. It lives
/// here so that `AppCore` can accept it without depending on `newsdesk-db`.
#[derive(Clone)]
pub struct Repos {
    /// News item repository.
    pub news: Arc<dyn NewsRepository>,
    /// Comment repository.
    pub comments: Arc<dyn CommentRepository>,
    /// User account repository.
    pub users: Arc<dyn UserRepository>,
    /// Login session repository.
    pub sessions: Arc<dyn SessionRepository>,
    /// Settings repository for application settings.
    pub settings: Arc<dyn SettingsRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        news: Arc<dyn NewsRepository>,
        comments: Arc<dyn CommentRepository>,
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionRepository>,
        settings: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            news,
            comments,
            users,
            sessions,
            settings,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g.
/// sqlx errors) and provides a clean interface for services to handle
/// storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g. foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Domain-specific errors for authentication and session operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login failed. Deliberately does not say which of username or
    /// password was wrong.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Signup with a username that is already registered.
    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    /// The presented session token is unknown or expired.
    #[error("Invalid or expired session")]
    InvalidSession,

    /// Invalid signup input (empty username, short password, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters map this to their own error types (HTTP status codes, CLI
/// exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
