use chrono::{DateTime, Utc};
use std::fmt;

use quiz_core::model::{
    Answer, AnswerRecord, Confidence, SessionItem, SessionStamp, SessionSummary, Submission,
    Verdict,
};
use quiz_core::{scorer, verifier};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── STEP RESULTS ──────────────────────────────────────────────────────────────
//

/// An answer that has been judged but not yet committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAnswer {
    pub submitted: Answer,
    pub verdict: Verdict,
}

/// What happened to an answer attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerStep {
    /// Judged; waiting for confidence and justification.
    Answered(PendingAnswer),
    /// Skipped and committed immediately; the session already advanced.
    Skipped(AnswerRecord),
    /// The current item was already answered; the attempt was dropped.
    Ignored,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz session.
///
/// Steps through its items one at a time:
/// `unanswered -> answered -> committed -> next`, or
/// `unanswered -> skipped -> next`. At most one item is in flight.
pub struct SessionService {
    stamp: SessionStamp,
    items: Vec<SessionItem>,
    current: usize,
    pending: Option<PendingAnswer>,
    records: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl SessionService {
    /// Create a new session over `items` in presentation order.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no items are provided.
    pub fn new(
        stamp: SessionStamp,
        items: Vec<SessionItem>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if items.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            stamp,
            items,
            current: 0,
            pending: None,
            records: Vec::new(),
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn stamp(&self) -> &SessionStamp {
        &self.stamp
    }

    #[must_use]
    pub fn items(&self) -> &[SessionItem] {
        &self.items
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// The in-memory answer log, oldest first.
    #[must_use]
    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    #[must_use]
    pub fn pending(&self) -> Option<PendingAnswer> {
        self.pending
    }

    /// Zero-based index of the current item.
    #[must_use]
    pub fn position(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.items.len(),
            answered: self.records.len(),
            remaining: self.items.len().saturating_sub(self.current),
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&SessionItem> {
        self.items.get(self.current)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Submit an answer or a skip for the current item.
    ///
    /// A skip is committed on the spot. A real answer is judged and held
    /// until [`SessionService::commit_current`]. Attempts while an answer is
    /// pending are ignored.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished.
    pub fn answer_current(
        &mut self,
        submission: Submission,
        at: DateTime<Utc>,
    ) -> Result<AnswerStep, SessionError> {
        let Some(item) = self.current_item() else {
            return Err(SessionError::Completed);
        };
        if self.pending.is_some() {
            return Ok(AnswerStep::Ignored);
        }

        match submission {
            Submission::Skip => {
                let record = AnswerRecord::skipped(item.clone(), scorer::tag_for(item), at);
                self.push_record(record.clone(), at);
                Ok(AnswerStep::Skipped(record))
            }
            Submission::Answer(submitted) => {
                let pending = PendingAnswer {
                    submitted,
                    verdict: verifier::judge(submitted, item),
                };
                self.pending = Some(pending);
                Ok(AnswerStep::Answered(pending))
            }
        }
    }

    /// Finalize the pending answer with the learner's confidence and
    /// justification, append it to the log and advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished,
    /// or `SessionError::NotAnswered` if nothing is pending.
    pub fn commit_current(
        &mut self,
        confidence: Confidence,
        justification: &str,
        at: DateTime<Utc>,
    ) -> Result<&AnswerRecord, SessionError> {
        let Some(item) = self.current_item() else {
            return Err(SessionError::Completed);
        };
        let Some(pending) = self.pending else {
            return Err(SessionError::NotAnswered);
        };

        let justification = justification.trim().to_string();
        let tag = scorer::tag_for(item);
        let record = AnswerRecord {
            item: item.clone(),
            submission: Submission::Answer(pending.submitted),
            verdict: pending.verdict,
            score: scorer::score_justification(&justification, tag),
            justification,
            confidence,
            tag,
            recorded_at: at,
        };

        self.pending = None;
        self.push_record(record, at);
        self.records.last().ok_or(SessionError::Completed)
    }

    /// Aggregate counts for a finished session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAnswered` while items remain, or a summary
    /// validation error.
    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        let completed_at = self.completed_at.ok_or(SessionError::NotAnswered)?;
        Ok(SessionSummary::from_records(
            self.stamp.clone(),
            self.started_at,
            completed_at,
            &self.records,
        )?)
    }

    fn push_record(&mut self, record: AnswerRecord, at: DateTime<Utc>) {
        self.records.push(record);
        self.current += 1;
        if self.current >= self.items.len() {
            self.completed_at = Some(at);
        }
    }
}

impl fmt::Debug for SessionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionService")
            .field("stamp", &self.stamp)
            .field("items_len", &self.items.len())
            .field("current", &self.current)
            .field("pending", &self.pending)
            .field("records_len", &self.records.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
