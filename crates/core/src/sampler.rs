//! Mastery-biased sampling without replacement.

use rand::Rng;

use crate::model::{MasteryLevel, MasteryMap, QuestionId};

/// Sampling weight for a level: `(6 - level)^2`.
#[must_use]
pub fn weight(level: MasteryLevel) -> u32 {
    level.weight()
}

/// Draw up to `k` distinct ids from `candidates`, favouring low mastery.
///
/// Each draw recomputes the weight sum over the ids still in the pool, picks a
/// uniform cursor in `[0, sum)` and walks the pool until the cursor falls
/// inside an id's slice; that id leaves the pool before the next draw. If `k`
/// exceeds the pool, the whole pool comes back (in draw order).
///
/// Duplicate ids in `candidates` are collapsed to their first occurrence.
#[must_use]
pub fn draw<R: Rng + ?Sized>(
    candidates: &[QuestionId],
    mastery: &MasteryMap,
    k: usize,
    rng: &mut R,
) -> Vec<QuestionId> {
    let mut pool: Vec<(QuestionId, u32)> = Vec::with_capacity(candidates.len());
    for id in candidates {
        if !pool.iter().any(|(seen, _)| seen == id) {
            pool.push((*id, weight(mastery.level(*id))));
        }
    }

    let mut picked = Vec::with_capacity(k.min(pool.len()));
    while !pool.is_empty() && picked.len() < k {
        let sum: u64 = pool.iter().map(|(_, w)| u64::from(*w)).sum();
        let cursor = rng.random_range(0..sum);

        let mut acc = 0_u64;
        let mut chosen = pool.len() - 1;
        for (idx, (_, w)) in pool.iter().enumerate() {
            acc += u64::from(*w);
            if cursor < acc {
                chosen = idx;
                break;
            }
        }

        let (id, _) = pool.remove(chosen);
        picked.push(id);
    }
    picked
}
