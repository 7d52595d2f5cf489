use thiserror::Error;

use crate::model::{AnswerError, MasteryError, ParseIdError, SessionSummaryError, TagError};

/// Any validation failure raised while rebuilding domain values from raw data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Mastery(#[from] MasteryError),
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Tag(#[from] TagError),
    #[error(transparent)]
    Id(#[from] ParseIdError),
    #[error(transparent)]
    Summary(#[from] SessionSummaryError),
}
