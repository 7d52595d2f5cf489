use std::sync::Arc;

use storage::repository::Storage;

use crate::config::QuizConfig;
use crate::error::AppServicesError;
use crate::sessions::SessionLoopService;
use crate::Clock;

/// Assembles app-facing services over a chosen storage backend.
#[derive(Clone)]
pub struct AppServices {
    config: QuizConfig,
    session_loop: Arc<SessionLoopService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the config is invalid or storage
    /// initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        config: QuizConfig,
    ) -> Result<Self, AppServicesError> {
        config.validate()?;
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, config))
    }

    /// Build services over throwaway in-memory storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Config` if the config is invalid.
    pub fn new_in_memory(clock: Clock, config: QuizConfig) -> Result<Self, AppServicesError> {
        config.validate()?;
        Ok(Self::from_storage(&Storage::in_memory(), clock, config))
    }

    fn from_storage(storage: &Storage, clock: Clock, config: QuizConfig) -> Self {
        let session_loop = Arc::new(SessionLoopService::new(clock, storage).with_config(config));
        Self {
            config,
            session_loop,
        }
    }

    #[must_use]
    pub fn config(&self) -> QuizConfig {
        self.config
    }

    #[must_use]
    pub fn session_loop(&self) -> Arc<SessionLoopService> {
        Arc::clone(&self.session_loop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use quiz_core::time::fixed_clock;

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let config = QuizConfig {
            bank_draws: 0,
            template_draws: 5,
        };
        let err = AppServices::new_in_memory(fixed_clock(), config)
            .err()
            .expect("zero draws must fail");
        assert!(matches!(
            err,
            AppServicesError::Config(ConfigError::ZeroCount { field: "bank_draws" })
        ));
    }

    #[tokio::test]
    async fn sqlite_services_start_against_a_fresh_database() {
        let services = AppServices::new_sqlite(
            "sqlite:file:memdb_app_services?mode=memory&cache=shared",
            fixed_clock(),
            QuizConfig::default(),
        )
        .await
        .unwrap();
        assert_eq!(services.config().session_len(), 20);
        assert_eq!(services.session_loop().bank().len(), 95);
    }
}
