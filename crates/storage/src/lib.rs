#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    AnswerLogEntry, AnswerLogRepository, InMemoryRepository, MasteryRecord, MasteryRepository,
    Storage, StorageError,
};
pub use sqlite::{SqliteInitError, SqliteRepository};
