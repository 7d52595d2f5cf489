#![forbid(unsafe_code)]

pub mod app_services;
pub mod background;
pub mod config;
pub mod error;
pub mod mastery_store;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use app_services::AppServices;
pub use background::BackgroundWriter;
pub use config::QuizConfig;
pub use error::{AppServicesError, ConfigError, FailSoft, SessionError};
pub use mastery_store::MasteryStore;

pub use sessions::{
    AnswerStep, QuizContext, ReviewEntry, SessionAnswerResult, SessionCommitResult,
    SessionLoopService, SessionReport, SessionService,
};
