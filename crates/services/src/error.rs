//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::SessionSummaryError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no items available for session")]
    Empty,
    #[error("session already completed")]
    Completed,
    #[error("no session has been started")]
    NotStarted,
    #[error("current item has not been answered yet")]
    NotAnswered,
    #[error(transparent)]
    Summary(#[from] SessionSummaryError),
}

/// Errors emitted while loading quiz configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field} must be greater than zero")]
    ZeroCount { field: &'static str },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Log-and-default handling for failures that must never reach the learner.
pub trait FailSoft<T> {
    /// Log a warning and return `T::default()` on error.
    fn fail_soft(self, context: &str) -> T
    where
        T: Default;
}

impl<T, E: std::fmt::Display> FailSoft<T> for Result<T, E> {
    fn fail_soft(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("{}: {} (fail-soft: using default)", context, err);
                T::default()
            }
        }
    }
}
