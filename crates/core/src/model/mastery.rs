use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::QuestionId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MasteryError {
    #[error("mastery level must be in 1..=5, got {0}")]
    OutOfRange(i64),
}

//
// ─── LEVEL ────────────────────────────────────────────────────────────────────
//

/// Leitner box of an item: 1 = least mastered, 5 = most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MasteryLevel(u8);

impl MasteryLevel {
    pub const MIN: MasteryLevel = MasteryLevel(1);
    pub const MAX: MasteryLevel = MasteryLevel(5);

    /// # Errors
    ///
    /// Returns `MasteryError::OutOfRange` for values outside `1..=5`.
    pub fn new(value: i64) -> Result<Self, MasteryError> {
        if (1..=5).contains(&value) {
            Ok(Self::clamped(value))
        } else {
            Err(MasteryError::OutOfRange(value))
        }
    }

    /// Clamp any integer into `1..=5`.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let v = value.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));
        Self(u8::try_from(v).unwrap_or(Self::MIN.0))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Sampling weight `(6 - level)^2`: 25 for box 1 down to 1 for box 5.
    #[must_use]
    pub fn weight(self) -> u32 {
        let w = 6 - u32::from(self.0);
        w * w
    }
}

impl Default for MasteryLevel {
    fn default() -> Self {
        Self::MIN
    }
}

//
// ─── MAP ──────────────────────────────────────────────────────────────────────
//

/// Mastery level per item identity. Absent ids read as level 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasteryMap {
    levels: BTreeMap<QuestionId, MasteryLevel>,
}

impl MasteryMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn level(&self, id: QuestionId) -> MasteryLevel {
        self.levels.get(&id).copied().unwrap_or_default()
    }

    pub fn set(&mut self, id: QuestionId, level: MasteryLevel) {
        self.levels.insert(id, level);
    }

    #[must_use]
    pub fn contains(&self, id: QuestionId) -> bool {
        self.levels.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, MasteryLevel)> + '_ {
        self.levels.iter().map(|(id, level)| (*id, *level))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl FromIterator<(QuestionId, MasteryLevel)> for MasteryMap {
    fn from_iter<I: IntoIterator<Item = (QuestionId, MasteryLevel)>>(iter: I) -> Self {
        Self {
            levels: iter.into_iter().collect(),
        }
    }
}
