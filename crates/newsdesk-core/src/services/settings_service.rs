//! Settings service - load, validate and persist application settings.

use std::sync::Arc;

use crate::ports::{CoreError, SettingsRepository};
use crate::settings::{Settings, SettingsUpdate, validate_settings};

/// Service for application settings.
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    /// Create a new settings service.
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    /// Load current settings.
    pub async fn get(&self) -> Result<Settings, CoreError> {
        Ok(self.repo.load().await?)
    }

    /// Apply a partial update, validate and persist.
    ///
    /// Returns the merged settings. Nothing is persisted when validation
    /// fails.
    pub async fn update(&self, update: SettingsUpdate) -> Result<Settings, CoreError> {
        let mut settings = self.repo.load().await?;
        settings.merge(&update);
        validate_settings(&settings)?;
        self.repo.save(&settings).await?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockSettingsRepo {
        settings: Mutex<Settings>,
    }

    impl MockSettingsRepo {
        fn new() -> Self {
            Self {
                settings: Mutex::new(Settings::with_defaults()),
            }
        }
    }

    #[async_trait]
    impl SettingsRepository for MockSettingsRepo {
        async fn load(&self) -> Result<Settings, RepositoryError> {
            Ok(self.settings.lock().unwrap().clone())
        }

        async fn save(&self, settings: &Settings) -> Result<(), RepositoryError> {
            *self.settings.lock().unwrap() = settings.clone();
            Ok(())
        }
    }

    #[tokio::test]
    async fn get_returns_defaults() {
        let service = SettingsService::new(Arc::new(MockSettingsRepo::new()));
        let settings = service.get().await.unwrap();
        assert_eq!(settings.effective_home_page_size(), 10);
    }

    #[tokio::test]
    async fn update_persists_merged_settings() {
        let repo = Arc::new(MockSettingsRepo::new());
        let service = SettingsService::new(repo.clone());

        let merged = service
            .update(SettingsUpdate {
                home_page_size: Some(Some(20)),
                ..SettingsUpdate::default()
            })
            .await
            .unwrap();

        assert_eq!(merged.home_page_size, Some(20));
        assert_eq!(repo.load().await.unwrap().home_page_size, Some(20));
    }

    #[tokio::test]
    async fn invalid_update_is_not_persisted() {
        let repo = Arc::new(MockSettingsRepo::new());
        let service = SettingsService::new(repo.clone());

        let err = service
            .update(SettingsUpdate {
                home_page_size: Some(Some(0)),
                ..SettingsUpdate::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Settings(_)));
        assert_eq!(repo.load().await.unwrap().home_page_size, Some(10));
    }
}
