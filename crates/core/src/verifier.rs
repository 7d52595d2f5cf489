//! Canonical answers and judging.
//!
//! A handful of bank texts carry a literal answer that disagrees with the
//! statement itself. Those are corrected by a static table of rules checked
//! in order against the normalized item text; the first rule that matches
//! wins, otherwise the stored answer stands.

use crate::model::{Answer, SessionItem, Verdict};
use crate::text::{contains_in_order, normalize};

/// One correction: a predicate on normalized text and the answer it forces.
#[derive(Debug, Clone, Copy)]
pub struct OverrideRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub answer: Answer,
}

/// Corrections, highest priority first.
// TODO: audit the remaining bank entries for contradictions of the same kind;
// only the thinner/ventilation pair has been confirmed so far.
pub const OVERRIDES: &[OverrideRule] = &[
    OverrideRule {
        name: "thinner-open-window",
        matches: |t| contains_in_order(t, &["しんなー", "まどをあけます"]),
        answer: Answer::True,
    },
    OverrideRule {
        name: "thinner-close-window",
        matches: |t| contains_in_order(t, &["しんなー", "まどをしめます"]),
        answer: Answer::False,
    },
];

/// First override rule matching `text`, if any.
#[must_use]
pub fn matching_override(text: &str) -> Option<&'static OverrideRule> {
    let normalized = normalize(text);
    OVERRIDES.iter().find(|rule| (rule.matches)(&normalized))
}

/// The answer treated as authoritative for `item`.
#[must_use]
pub fn canonical_answer(item: &SessionItem) -> Answer {
    matching_override(item.text()).map_or_else(|| item.stored_answer(), |rule| rule.answer)
}

/// Compare a submitted answer with the canonical one. Never called for skips.
#[must_use]
pub fn judge(submitted: Answer, item: &SessionItem) -> Verdict {
    if submitted == canonical_answer(item) {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}
