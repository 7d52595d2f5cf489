use quiz_core::model::{Answer, AnswerRecord, JustificationScore, SessionSummary, TopicTag, Verdict};
use quiz_core::{rationale, verifier};

use super::service::SessionService;
use crate::error::SessionError;

/// One line of the post-session review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    pub text: String,
    pub canonical: Answer,
    /// The learner's justification, or the built-in rationale when they gave none.
    pub explanation: String,
    pub learner_wrote_it: bool,
    pub tag: TopicTag,
    pub score: JustificationScore,
}

impl ReviewEntry {
    #[must_use]
    pub fn from_record(record: &AnswerRecord) -> Self {
        let learner_wrote_it = !record.justification.is_empty();
        let explanation = if learner_wrote_it {
            record.justification.clone()
        } else {
            rationale::rationale_for(&record.item).to_string()
        };
        Self {
            text: record.item.text().to_string(),
            canonical: verifier::canonical_answer(&record.item),
            explanation,
            learner_wrote_it,
            tag: record.tag,
            score: record.score,
        }
    }
}

/// Everything shown once a session is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub summary: SessionSummary,
    pub wrong: Vec<ReviewEntry>,
    pub skipped: Vec<ReviewEntry>,
}

impl SessionReport {
    /// # Errors
    ///
    /// Returns `SessionError::NotAnswered` if the session is not complete yet.
    pub fn from_session(session: &SessionService) -> Result<Self, SessionError> {
        let summary = session.summary()?;
        let pick = |verdict: Verdict| {
            session
                .records()
                .iter()
                .filter(|r| r.verdict == verdict)
                .map(ReviewEntry::from_record)
                .collect::<Vec<_>>()
        };
        Ok(Self {
            summary,
            wrong: pick(Verdict::Incorrect),
            skipped: pick(Verdict::Skipped),
        })
    }
}
