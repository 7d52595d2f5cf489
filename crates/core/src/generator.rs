//! Synthetic true/false items minted from paired statements.

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::bank::TEMPLATE_PAIRS;
use crate::model::{Answer, QuestionId, TemplateItem, TemplateItemId, TopicTag};

/// A true phrasing and a false phrasing of the same fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplatePair {
    /// Bank item the pair maps back to for mastery tracking.
    pub base_id: QuestionId,
    pub tag: TopicTag,
    pub true_text: &'static str,
    pub false_text: &'static str,
}

/// Mints template items; owns the serial that keeps ids unique across calls.
#[derive(Debug, Clone)]
pub struct TemplateGenerator {
    pairs: Vec<TemplatePair>,
    next_serial: u64,
}

impl TemplateGenerator {
    #[must_use]
    pub fn new(pairs: impl Into<Vec<TemplatePair>>) -> Self {
        Self {
            pairs: pairs.into(),
            next_serial: 0,
        }
    }

    /// Generator over the shipped template bank.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(TEMPLATE_PAIRS)
    }

    /// Shuffle the pair bank, keep the first `n` pairs and flip a fair coin per
    /// pair to choose its phrasing. Returns fewer than `n` items when the bank
    /// is smaller.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        n: usize,
        minted_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<TemplateItem> {
        let mut order: Vec<&TemplatePair> = self.pairs.iter().collect();
        order.shuffle(rng);

        let mut items = Vec::with_capacity(n.min(order.len()));
        for (index, pair) in order.into_iter().take(n).enumerate() {
            let truthful = rng.random_bool(0.5);
            let serial = self.next_serial;
            self.next_serial = self.next_serial.wrapping_add(1);

            let index = u32::try_from(index).unwrap_or(u32::MAX);
            items.push(TemplateItem {
                id: TemplateItemId::new(pair.base_id, minted_at, index, serial),
                text: if truthful { pair.true_text } else { pair.false_text }.to_string(),
                answer: Answer::from_bool(truthful),
                tag: pair.tag,
            });
        }
        items
    }
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::standard()
    }
}
