pub mod components;
pub mod styles;
pub mod views;

use std::sync::Arc;
use anyhow::{Context, Result};
use log::info;

use crate::base::{PlatformBrightness, PreferenceStore};
use crate::config::AppConfig;
use crate::data::{init_database, SqlitePreferenceStore};
use crate::platform::OsBrightness;
use crate::services::ThemeService;
use crate::utils;

/// Composition root: owns the one theme service for the process lifetime
pub struct AppContext {
    pub config: AppConfig,
    theme_service: Arc<ThemeService>,
}

impl AppContext {
    /// Wires the service from explicit collaborators
    pub fn new(
        config: AppConfig,
        store: Arc<dyn PreferenceStore>,
        platform: Arc<dyn PlatformBrightness>,
    ) -> Result<Self> {
        let theme_service = ThemeService::new(store, platform, config.theme_options())?;
        Ok(Self {
            config,
            theme_service,
        })
    }

    /// Wires the service against the on-disk database and the OS
    pub fn from_config(config: AppConfig) -> Result<Self> {
        utils::ensure_directory_exists(&config.database_path)?;
        let pool = init_database(&config.database_path)
            .context("Failed to initialize preference database")?;

        let store = Arc::new(SqlitePreferenceStore::new(pool));
        let platform = Arc::new(OsBrightness::new(config.brightness_poll_interval())?);
        Self::new(config, store, platform)
    }

    /// The shared theme service; every call returns the same instance
    pub fn theme_service(&self) -> Arc<ThemeService> {
        self.theme_service.clone()
    }

    /// Lets pending saves land, then disposes the theme service
    pub async fn shutdown(&self) {
        info!("Beginning application shutdown sequence");
        self.theme_service.flush().await;
        self.theme_service.dispose();
        info!("Application shutdown complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemoryPreferenceStore;
    use crate::models::{Brightness, ThemeMode};
    use crate::platform::ManualBrightness;
    use crate::services::THEME_MODE_KEY;

    fn memory_context() -> Result<(AppContext, Arc<MemoryPreferenceStore>)> {
        let store = Arc::new(MemoryPreferenceStore::new());
        let platform = Arc::new(ManualBrightness::new(Brightness::Dark));
        let context = AppContext::new(AppConfig::default(), store.clone(), platform)?;
        Ok((context, store))
    }

    #[tokio::test]
    async fn test_theme_service_is_identity_stable() -> Result<()> {
        let (context, _store) = memory_context()?;
        let first = context.theme_service();
        let second = context.theme_service();
        assert!(Arc::ptr_eq(&first, &second));
        Ok(())
    }

    #[tokio::test]
    async fn test_shutdown_saves_then_disposes() -> Result<()> {
        let (context, store) = memory_context()?;
        let service = context.theme_service();
        service.start_observing();
        service.set_preference(ThemeMode::Light);

        context.shutdown().await;

        assert!(service.is_disposed());
        assert_eq!(store.get_string(THEME_MODE_KEY).await?, Some("light".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn test_from_config_round_trips_through_sqlite() -> Result<()> {
        let dir = std::env::temp_dir().join(format!("themekeeper-ctx-{}", std::process::id()));
        let config = AppConfig {
            database_path: dir.join("prefs.db"),
            ..AppConfig::default()
        };

        {
            let context = AppContext::from_config(config.clone())?;
            context.theme_service().set_preference(ThemeMode::Dark);
            context.shutdown().await;
        }

        // Reopen the same file, with a host-driven platform
        let pool = init_database(&config.database_path)?;
        let store = Arc::new(SqlitePreferenceStore::new(pool));
        let platform = Arc::new(ManualBrightness::new(Brightness::Light));
        let context = AppContext::new(config, store, platform)?;

        let service = context.theme_service();
        service.start_observing();
        service.flush().await;
        assert_eq!(service.mode(), ThemeMode::Dark);
        context.shutdown().await;

        std::fs::remove_dir_all(&dir)?;
        Ok(())
    }
}
