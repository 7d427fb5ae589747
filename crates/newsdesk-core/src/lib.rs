//! Core domain types, ports and services for newsdesk.
//!
//! This crate is the hub of the workspace: it defines the domain model
//! (news items, comments, users, sessions), the port traits that
//! infrastructure crates implement, and the services that orchestrate
//! between them. It knows nothing about SQL or HTTP.

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{
    Comment, CommentUpdate, NewComment, NewNewsItem, NewUser, NewsItem, Session, User,
};
pub use ports::{
    AuthError, CommentRepository, CoreError, NewsRepository, Repos, RepositoryError,
    SessionRepository, SettingsRepository, UserRepository,
};
pub use services::{AppCore, AuthService, CommentService, NewsService, SettingsService};
pub use settings::{
    DEFAULT_HOME_PAGE_SIZE, DEFAULT_SESSION_TTL_HOURS, Settings, SettingsError, SettingsUpdate,
    validate_settings,
};

// Re-export path utilities
pub use paths::{PathError, data_root, database_path};
