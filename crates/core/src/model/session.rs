use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{AnswerRecord, SessionStamp, Verdict};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("too many records for a single session: {len}")]
    TooManyRecords { len: usize },
}

/// Aggregate counts for a completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    stamp: SessionStamp,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    total: u32,
    correct: u32,
    incorrect: u32,
    skipped: u32,
}

impl SessionSummary {
    /// Build a summary from the session's answer log.
    ///
    /// # Errors
    ///
    /// Returns `SessionSummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    /// Returns `SessionSummaryError::TooManyRecords` if the record count cannot fit in `u32`.
    pub fn from_records(
        stamp: SessionStamp,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        records: &[AnswerRecord],
    ) -> Result<Self, SessionSummaryError> {
        if completed_at < started_at {
            return Err(SessionSummaryError::InvalidTimeRange);
        }
        let total = u32::try_from(records.len())
            .map_err(|_| SessionSummaryError::TooManyRecords { len: records.len() })?;

        let mut correct = 0_u32;
        let mut incorrect = 0_u32;
        let mut skipped = 0_u32;
        for record in records {
            match record.verdict {
                Verdict::Correct => correct = correct.saturating_add(1),
                Verdict::Incorrect => incorrect = incorrect.saturating_add(1),
                Verdict::Skipped => skipped = skipped.saturating_add(1),
            }
        }

        Ok(Self {
            stamp,
            started_at,
            completed_at,
            total,
            correct,
            incorrect,
            skipped,
        })
    }

    #[must_use]
    pub fn stamp(&self) -> &SessionStamp {
        &self.stamp
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    #[must_use]
    pub fn skipped(&self) -> u32 {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Answer, Confidence, JustificationScore, QuestionId, QuestionItem, SessionItem, Submission,
        TopicTag,
    };
    use crate::time::fixed_now;

    fn record(id: u32, verdict: Verdict) -> AnswerRecord {
        let item = SessionItem::from(QuestionItem::new(QuestionId::new(id), "q", Answer::True));
        if verdict == Verdict::Skipped {
            return AnswerRecord::skipped(item, TopicTag::Procedure, fixed_now());
        }
        AnswerRecord {
            item,
            submission: Submission::Answer(Answer::True),
            verdict,
            justification: String::new(),
            confidence: Confidence::Medium,
            tag: TopicTag::Procedure,
            score: JustificationScore::Missing,
            recorded_at: fixed_now(),
        }
    }

    #[test]
    fn summary_counts_verdicts() {
        let now = fixed_now();
        let records = vec![
            record(1, Verdict::Correct),
            record(2, Verdict::Incorrect),
            record(3, Verdict::Skipped),
            record(4, Verdict::Correct),
        ];

        let summary =
            SessionSummary::from_records(SessionStamp::from_persisted("s"), now, now, &records)
                .unwrap();

        assert_eq!(summary.total(), 4);
        assert_eq!(summary.correct(), 2);
        assert_eq!(summary.incorrect(), 1);
        assert_eq!(summary.skipped(), 1);
    }

    #[test]
    fn summary_rejects_inverted_time_range() {
        let now = fixed_now();
        let err = SessionSummary::from_records(
            SessionStamp::from_persisted("s"),
            now,
            now - chrono::Duration::seconds(1),
            &[],
        )
        .unwrap_err();
        assert_eq!(err, SessionSummaryError::InvalidTimeRange);
    }
}
