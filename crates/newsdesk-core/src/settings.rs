//! Settings domain types and validation.
//!
//! This module contains the core settings types used across the
//! application. These are pure domain types with no infrastructure
//! dependencies.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of news items shown on the home page.
pub const DEFAULT_HOME_PAGE_SIZE: u32 = 10;

/// Default login session lifetime (14 days).
pub const DEFAULT_SESSION_TTL_HOURS: u32 = 336;

/// Application settings structure.
///
/// All fields are optional to support partial updates and graceful
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Number of news items shown on the home page.
    pub home_page_size: Option<u32>,

    /// Login session lifetime in hours; sessions older than this read as
    /// anonymous.
    pub session_ttl_hours: Option<u32>,

    /// Site title shown in page contexts.
    pub site_title: Option<String>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            home_page_size: Some(DEFAULT_HOME_PAGE_SIZE),
            session_ttl_hours: Some(DEFAULT_SESSION_TTL_HOURS),
            site_title: None,
        }
    }

    /// Get the effective home page size (with default fallback).
    #[must_use]
    pub const fn effective_home_page_size(&self) -> u32 {
        match self.home_page_size {
            Some(size) => size,
            None => DEFAULT_HOME_PAGE_SIZE,
        }
    }

    /// Get the effective session lifetime in hours (with default
    /// fallback).
    #[must_use]
    pub const fn effective_session_ttl_hours(&self) -> u32 {
        match self.session_ttl_hours {
            Some(hours) => hours,
            None => DEFAULT_SESSION_TTL_HOURS,
        }
    }

    /// Merge an update into these settings, only touching fields that
    /// are present in the update.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(ref size) = other.home_page_size {
            self.home_page_size = *size;
        }
        if let Some(ref hours) = other.session_ttl_hours {
            self.session_ttl_hours = *hours;
        }
        if let Some(ref title) = other.site_title {
            self.site_title.clone_from(title);
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = reset the field to its default
/// - `Some(Some(v))` = set the field to `v`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsUpdate {
    pub home_page_size: Option<Option<u32>>,
    pub session_ttl_hours: Option<Option<u32>>,
    pub site_title: Option<Option<String>>,
}

/// Errors produced by settings validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("home_page_size must be between 1 and 100, got {0}")]
    InvalidHomePageSize(u32),

    #[error("session_ttl_hours must be at least 1")]
    InvalidSessionTtl,

    #[error("site_title cannot be empty")]
    EmptySiteTitle,
}

/// Validate a settings snapshot before it is persisted.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(size) = settings.home_page_size {
        if size == 0 || size > 100 {
            return Err(SettingsError::InvalidHomePageSize(size));
        }
    }
    if settings.session_ttl_hours == Some(0) {
        return Err(SettingsError::InvalidSessionTtl);
    }
    if let Some(ref title) = settings.site_title {
        if title.trim().is_empty() {
            return Err(SettingsError::EmptySiteTitle);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_page_size_ten() {
        let settings = Settings::with_defaults();
        assert_eq!(settings.effective_home_page_size(), 10);
        assert_eq!(settings.effective_session_ttl_hours(), 336);
    }

    #[test]
    fn merge_only_touches_present_fields() {
        let mut settings = Settings::with_defaults();
        let update = SettingsUpdate {
            home_page_size: Some(Some(25)),
            ..SettingsUpdate::default()
        };

        settings.merge(&update);

        assert_eq!(settings.home_page_size, Some(25));
        assert_eq!(settings.session_ttl_hours, Some(DEFAULT_SESSION_TTL_HOURS));
    }

    #[test]
    fn merge_can_reset_to_default() {
        let mut settings = Settings {
            home_page_size: Some(3),
            ..Settings::with_defaults()
        };
        let update = SettingsUpdate {
            home_page_size: Some(None),
            ..SettingsUpdate::default()
        };

        settings.merge(&update);

        assert_eq!(settings.home_page_size, None);
        assert_eq!(settings.effective_home_page_size(), DEFAULT_HOME_PAGE_SIZE);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let settings = Settings {
            home_page_size: Some(0),
            ..Settings::with_defaults()
        };
        assert_eq!(
            validate_settings(&settings),
            Err(SettingsError::InvalidHomePageSize(0))
        );
    }

    #[test]
    fn blank_site_title_is_rejected() {
        let settings = Settings {
            site_title: Some("   ".into()),
            ..Settings::with_defaults()
        };
        assert_eq!(validate_settings(&settings), Err(SettingsError::EmptySiteTitle));
    }

    #[test]
    fn settings_survive_json_round_trip() {
        let settings = Settings {
            home_page_size: Some(7),
            session_ttl_hours: None,
            site_title: Some("Newsdesk".into()),
        };

        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();

        assert_eq!(back, settings);
    }

    #[test]
    fn unknown_fields_are_ignored_on_load() {
        // Settings written by a newer build must still load.
        let back: Settings =
            serde_json::from_str(r#"{"home_page_size": 5, "theme": "dark"}"#).unwrap();
        assert_eq!(back.home_page_size, Some(5));
    }
}
