//! Shipped content: the true/false question bank, template pairs and
//! hand-written rationales.

mod questions;
mod rationales;
mod templates;

pub use templates::TEMPLATE_PAIRS;

use crate::model::{QuestionId, QuestionItem};

/// The static question bank, in id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    items: Vec<QuestionItem>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(items: Vec<QuestionItem>) -> Self {
        Self { items }
    }

    /// The bank shipped with the quiz.
    #[must_use]
    pub fn standard() -> Self {
        let items = questions::QUESTIONS
            .iter()
            .map(|(id, text, answer)| QuestionItem::new(QuestionId::new(*id), *text, *answer))
            .collect();
        Self { items }
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&QuestionItem> {
        self.items.iter().find(|q| q.id == id)
    }

    #[must_use]
    pub fn items(&self) -> &[QuestionItem] {
        &self.items
    }

    /// Candidate list for the sampler, in bank order.
    #[must_use]
    pub fn ids(&self) -> Vec<QuestionId> {
        self.items.iter().map(|q| q.id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Hand-written explanation for a bank id.
#[must_use]
pub fn rationale_by_id(id: QuestionId) -> Option<&'static str> {
    rationales::RATIONALES
        .iter()
        .find(|(key, _)| *key == id.value())
        .map(|(_, text)| *text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_bank_has_95_unique_ids() {
        let bank = QuestionBank::standard();
        assert_eq!(bank.len(), 95);
        let ids: HashSet<_> = bank.ids().into_iter().collect();
        assert_eq!(ids.len(), 95);
        assert!(bank.get(QuestionId::new(1)).is_some());
        assert!(bank.get(QuestionId::new(96)).is_none());
    }

    #[test]
    fn template_pairs_map_back_into_the_bank() {
        let bank = QuestionBank::standard();
        assert_eq!(TEMPLATE_PAIRS.len(), 14);
        for pair in TEMPLATE_PAIRS {
            assert!(bank.get(pair.base_id).is_some(), "base {} not in bank", pair.base_id.value());
            assert_ne!(pair.true_text, pair.false_text);
        }
    }
}
