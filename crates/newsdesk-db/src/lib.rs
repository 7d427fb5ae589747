//! `SQLite` persistence for newsdesk.
//!
//! Implements the repository ports from `newsdesk-core` on top of sqlx.
//! The `SqlitePool` is confined to this crate and never exposed through
//! port trait signatures.

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

// Re-export repository implementations
pub use repositories::{
    SqliteCommentRepository, SqliteNewsRepository, SqliteSessionRepository,
    SqliteSettingsRepository, SqliteUserRepository,
};

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
