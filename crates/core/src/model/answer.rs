use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised when decoding answer-related values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("invalid answer value: {0}")]
    InvalidAnswer(String),
    #[error("invalid confidence value: {0}")]
    InvalidConfidence(String),
    #[error("invalid justification score: {0}")]
    InvalidScore(u8),
}

//
// ─── ANSWER ───────────────────────────────────────────────────────────────────
//

/// One of the two polar values a true/false item can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    True,
    False,
}

impl Answer {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Answer::True => "true",
            Answer::False => "false",
        }
    }

    #[must_use]
    pub fn from_bool(value: bool) -> Self {
        if value { Answer::True } else { Answer::False }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Answer {
    type Err = AnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(Answer::True),
            "false" => Ok(Answer::False),
            other => Err(AnswerError::InvalidAnswer(other.to_string())),
        }
    }
}

//
// ─── SUBMISSION ───────────────────────────────────────────────────────────────
//

/// What the learner sent for the current item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Submission {
    Answer(Answer),
    Skip,
}

impl Submission {
    pub const SKIP_MARKER: &'static str = "skip";

    /// Storage form: `"true"`, `"false"` or the skip marker.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Submission::Answer(answer) => answer.as_str(),
            Submission::Skip => Self::SKIP_MARKER,
        }
    }
}

impl FromStr for Submission {
    type Err = AnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::SKIP_MARKER {
            return Ok(Submission::Skip);
        }
        s.parse().map(Submission::Answer)
    }
}

//
// ─── VERDICT ──────────────────────────────────────────────────────────────────
//

/// Ternary correctness of a committed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Correct,
    Incorrect,
    Skipped,
}

impl Verdict {
    /// `Some(true)` / `Some(false)`, or `None` for a skip.
    #[must_use]
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Verdict::Correct => Some(true),
            Verdict::Incorrect => Some(false),
            Verdict::Skipped => None,
        }
    }

    #[must_use]
    pub fn from_bool(value: Option<bool>) -> Self {
        match value {
            Some(true) => Verdict::Correct,
            Some(false) => Verdict::Incorrect,
            None => Verdict::Skipped,
        }
    }
}

//
// ─── CONFIDENCE ───────────────────────────────────────────────────────────────
//

/// Self-reported confidence captured after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Confidence {
    High,
    #[default]
    Medium,
    Low,
}

impl Confidence {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::High => "hi",
            Confidence::Medium => "md",
            Confidence::Low => "lo",
        }
    }
}

impl FromStr for Confidence {
    type Err = AnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hi" => Ok(Confidence::High),
            "md" => Ok(Confidence::Medium),
            "lo" => Ok(Confidence::Low),
            other => Err(AnswerError::InvalidConfidence(other.to_string())),
        }
    }
}

//
// ─── JUSTIFICATION SCORE ──────────────────────────────────────────────────────
//

/// Quality of a free-text justification, from keyword hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum JustificationScore {
    /// No tag keyword found (or empty text).
    #[default]
    Missing,
    /// Exactly one keyword found.
    Partial,
    /// Two or more keywords found.
    Strong,
}

impl JustificationScore {
    #[must_use]
    pub fn from_hits(hits: usize) -> Self {
        match hits {
            0 => JustificationScore::Missing,
            1 => JustificationScore::Partial,
            _ => JustificationScore::Strong,
        }
    }

    /// Numeric form in `{0, 1, 2}`.
    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            JustificationScore::Missing => 0,
            JustificationScore::Partial => 1,
            JustificationScore::Strong => 2,
        }
    }

    /// # Errors
    ///
    /// Returns `AnswerError::InvalidScore` for values outside `0..=2`.
    pub fn from_u8(value: u8) -> Result<Self, AnswerError> {
        match value {
            0 => Ok(JustificationScore::Missing),
            1 => Ok(JustificationScore::Partial),
            2 => Ok(JustificationScore::Strong),
            other => Err(AnswerError::InvalidScore(other)),
        }
    }
}
