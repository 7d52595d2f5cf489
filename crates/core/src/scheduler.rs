use crate::model::{Confidence, MasteryLevel, MasteryMap, QuestionId, Verdict};

//
// ─── LEITNER RULE ──────────────────────────────────────────────────────────────
//

/// Box step for a committed answer.
///
/// * correct with high confidence: `+2`
/// * correct otherwise: `+1`
/// * incorrect: `-1`
/// * skipped: no change
#[must_use]
pub fn step(verdict: Verdict, confidence: Confidence) -> i64 {
    match (verdict, confidence) {
        (Verdict::Correct, Confidence::High) => 2,
        (Verdict::Correct, _) => 1,
        (Verdict::Incorrect, _) => -1,
        (Verdict::Skipped, _) => 0,
    }
}

/// Level after applying one answer to `current`, clamped to `[1, 5]`.
#[must_use]
pub fn next_level(current: MasteryLevel, verdict: Verdict, confidence: Confidence) -> MasteryLevel {
    MasteryLevel::clamped(i64::from(current.value()) + step(verdict, confidence))
}

//
// ─── APPLYING TO THE MAP ───────────────────────────────────────────────────────
//

/// Before/after snapshot of one mastery write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasteryChange {
    pub id: QuestionId,
    pub before: MasteryLevel,
    pub after: MasteryLevel,
}

/// Update `mastery` for `id` after a committed answer.
///
/// Returns `None` for skips; the map is left untouched and nothing needs
/// saving. Otherwise the new level is written back (even when unchanged, so
/// the id becomes an explicit entry) and the change is returned.
pub fn apply_review(
    mastery: &mut MasteryMap,
    id: QuestionId,
    verdict: Verdict,
    confidence: Confidence,
) -> Option<MasteryChange> {
    if verdict == Verdict::Skipped {
        return None;
    }
    let before = mastery.level(id);
    let after = next_level(before, verdict, confidence);
    mastery.set(id, after);
    Some(MasteryChange { id, before, after })
}
