use chrono::{DateTime, Utc};

use crate::model::{Confidence, JustificationScore, SessionItem, Submission, TopicTag, Verdict};

/// Record of one session item after the learner moved past it.
///
/// Appended to the in-memory session log and mirrored to the durable log.
/// Never mutated after it is built.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerRecord {
    pub item: SessionItem,
    pub submission: Submission,
    pub verdict: Verdict,
    /// Trimmed learner justification; empty for skips.
    pub justification: String,
    pub confidence: Confidence,
    pub tag: TopicTag,
    pub score: JustificationScore,
    pub recorded_at: DateTime<Utc>,
}

impl AnswerRecord {
    /// A skip: no verdict, no justification, low confidence, score 0.
    #[must_use]
    pub fn skipped(item: SessionItem, tag: TopicTag, recorded_at: DateTime<Utc>) -> Self {
        Self {
            item,
            submission: Submission::Skip,
            verdict: Verdict::Skipped,
            justification: String::new(),
            confidence: Confidence::Low,
            tag,
            score: JustificationScore::Missing,
            recorded_at,
        }
    }
}
