//! Authentication service - signup, login and session resolution.
//!
//! Sessions are bearer tokens stored server-side. An unknown, malformed
//! or expired token resolves to an anonymous request rather than an
//! error, so adapters can fall back to redirect-to-login behavior.

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::user::{NewUser, Session, User};
use crate::ports::{AuthError, RepositoryError, SessionRepository, SettingsRepository, UserRepository};
use crate::utils::password::{hash_password, verify_password};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Maximum accepted username length.
const MAX_USERNAME_LEN: usize = 150;

/// Service for user accounts and login sessions.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionRepository>,
    settings: Arc<dyn SettingsRepository>,
}

impl AuthService {
    /// Create a new auth service.
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionRepository>,
        settings: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            users,
            sessions,
            settings,
        }
    }

    /// Register a new user and open a session for them.
    pub async fn signup(&self, new: NewUser) -> Result<(User, Session), AuthError> {
        let username = new.username.trim().to_owned();
        if username.is_empty() {
            return Err(AuthError::Validation("username cannot be empty".into()));
        }
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(AuthError::Validation(format!(
                "username exceeds {MAX_USERNAME_LEN} characters"
            )));
        }
        if new.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let hash = hash_password(&new.password);
        let id = match self.users.insert(&username, &hash).await {
            Ok(id) => id,
            Err(RepositoryError::AlreadyExists(_)) => {
                return Err(AuthError::UsernameTaken(username));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(user_id = id, username = %username, "registered new user");

        let user = User { id, username };
        let session = self.open_session(user.id).await?;
        Ok((user, session))
    }

    /// Authenticate a username/password pair and open a session.
    pub async fn login(&self, username: &str, password: &str) -> Result<(User, Session), AuthError> {
        let Some(hash) = self.users.password_hash(username).await? else {
            tracing::debug!(username, "login attempt for unknown user");
            return Err(AuthError::InvalidCredentials);
        };
        if !verify_password(password, &hash) {
            tracing::debug!(username, "login attempt with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let user = self
            .users
            .get_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;
        let session = self.open_session(user.id).await?;
        Ok((user, session))
    }

    /// Close a session. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) -> Result<(), AuthError> {
        self.sessions.delete(token).await?;
        Ok(())
    }

    /// Resolve a bearer token to its user, if the session is live.
    ///
    /// Returns `Ok(None)` for unknown and expired tokens; expired
    /// sessions are removed on sight.
    pub async fn authenticate(&self, token: &str) -> Result<Option<User>, AuthError> {
        let Some(session) = self.sessions.get(token).await? else {
            return Ok(None);
        };

        let ttl_hours = self.settings.load().await?.effective_session_ttl_hours();
        if Utc::now() - session.created_at > Duration::hours(i64::from(ttl_hours)) {
            tracing::debug!(user_id = session.user_id, "dropping expired session");
            self.sessions.delete(token).await?;
            return Ok(None);
        }

        Ok(self.users.get(session.user_id).await?)
    }

    async fn open_session(&self, user_id: i64) -> Result<Session, AuthError> {
        let session = Session {
            token: Uuid::new_v4().to_string(),
            user_id,
            created_at: Utc::now(),
        };
        self.sessions.insert(&session).await?;
        Ok(session)
    }
}
