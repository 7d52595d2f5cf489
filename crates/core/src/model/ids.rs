use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a bank question, also used as the mastery key.
///
/// Template items map back onto the bank through their base id, so a single
/// `QuestionId` can accumulate mastery from both sources.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(u32);

impl QuestionId {
    /// Creates a new `QuestionId`
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

/// Identifier of a generated template item.
///
/// Built from the base id, the generation timestamp, the position inside the
/// generated batch and a serial owned by the generator. The serial keeps ids
/// distinct when two batches are minted within the same millisecond.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateItemId {
    base: QuestionId,
    minted_at_ms: i64,
    index: u32,
    serial: u64,
}

impl TemplateItemId {
    #[must_use]
    pub fn new(base: QuestionId, minted_at: DateTime<Utc>, index: u32, serial: u64) -> Self {
        Self {
            base,
            minted_at_ms: minted_at.timestamp_millis(),
            index,
            serial,
        }
    }

    #[must_use]
    pub fn base(&self) -> QuestionId {
        self.base
    }
}

/// Opaque token grouping the durable log entries of one session.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionStamp(String);

impl SessionStamp {
    const SUFFIX_LEN: usize = 6;

    /// Mint a stamp from a time component (base-36 millis) and a random suffix.
    #[must_use]
    pub fn mint<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Self {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or_default();
        let mut stamp = to_base36(millis);
        stamp.push('-');
        for _ in 0..Self::SUFFIX_LEN {
            let digit = rng.random_range(0..36_u32);
            stamp.push(char::from_digit(digit, 36).unwrap_or('0'));
        }
        Self(stamp)
    }

    /// Rehydrate a stamp read back from storage.
    #[must_use]
    pub fn from_persisted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        let digit = u32::try_from(value % 36).unwrap_or_default();
        digits.push(char::from_digit(digit, 36).unwrap_or('0'));
        value /= 36;
    }
    digits.iter().rev().collect()
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Debug for TemplateItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TemplateItemId({self})")
    }
}

impl fmt::Debug for SessionStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionStamp({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TemplateItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tpl-{}-{}-{}-{}",
            self.base, self.minted_at_ms, self.serial, self.index
        )
    }
}

impl fmt::Display for SessionStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl ParseIdError {
    fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
        }
    }
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for QuestionId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(QuestionId::new)
            .map_err(|_| ParseIdError::new("QuestionId"))
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_question_id_display() {
        let id = QuestionId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_question_id_from_str_invalid() {
        let result = "not-a-number".parse::<QuestionId>();
        assert!(result.is_err());
    }

    #[test]
    fn test_template_id_display() {
        let id = TemplateItemId::new(QuestionId::new(58), fixed_now(), 3, 11);
        assert_eq!(id.to_string(), "tpl-58-1700000000000-11-3");
        assert_eq!(id.base(), QuestionId::new(58));
    }

    #[test]
    fn test_template_ids_differ_by_serial() {
        let a = TemplateItemId::new(QuestionId::new(1), fixed_now(), 0, 0);
        let b = TemplateItemId::new(QuestionId::new(1), fixed_now(), 0, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_session_stamp_combines_time_and_random_suffix() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let stamp = SessionStamp::mint(fixed_now(), &mut rng);
        let (time, suffix) = stamp.as_str().split_once('-').unwrap();

        assert_eq!(time, to_base36(1_700_000_000_000));
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_session_stamp_is_reproducible_for_a_seed() {
        let a = SessionStamp::mint(fixed_now(), &mut ChaCha8Rng::seed_from_u64(3));
        let b = SessionStamp::mint(fixed_now(), &mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }
}
