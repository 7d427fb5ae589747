//! `AppCore` - the primary application facade.
//!
//! This is the composition point for core services. Adapters (CLI, web)
//! receive an `AppCore` instance and use it to access all functionality.

use crate::ports::Repos;

use super::{AuthService, CommentService, NewsService, SettingsService};

/// The core application facade.
///
/// `AppCore` provides access to all core services. It's constructed at
/// the adapter's composition root (main.rs or bootstrap.rs) with
/// concrete repository implementations.
pub struct AppCore {
    news: NewsService,
    comments: CommentService,
    auth: AuthService,
    settings: SettingsService,
}

impl AppCore {
    /// Create a new `AppCore` from a repository container.
    pub fn new(repos: Repos) -> Self {
        Self {
            news: NewsService::new(repos.news.clone(), repos.settings.clone()),
            comments: CommentService::new(repos.comments, repos.news),
            auth: AuthService::new(repos.users, repos.sessions, repos.settings.clone()),
            settings: SettingsService::new(repos.settings),
        }
    }

    /// Access the news service.
    pub const fn news(&self) -> &NewsService {
        &self.news
    }

    /// Access the comment service.
    pub const fn comments(&self) -> &CommentService {
        &self.comments
    }

    /// Access the auth service.
    pub const fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Access the settings service.
    pub const fn settings(&self) -> &SettingsService {
        &self.settings
    }
}
