use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::bank::QuestionBank;
use quiz_core::generator::TemplateGenerator;
use quiz_core::model::{MasteryMap, SessionItem};
use quiz_core::sampler;

use crate::config::QuizConfig;

/// Selection result for a session build.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPlan {
    /// Items in presentation order.
    pub items: Vec<SessionItem>,
    pub sampled: usize,
    pub generated: usize,
}

impl SessionPlan {
    /// Total number of items in this plan.
    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Returns true when no items were selected for this session.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Composes a session from mastery-weighted bank draws and fresh template items.
pub struct SessionBuilder<'a> {
    bank: &'a QuestionBank,
    config: QuizConfig,
}

impl<'a> SessionBuilder<'a> {
    #[must_use]
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self {
            bank,
            config: QuizConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: QuizConfig) -> Self {
        self.config = config;
        self
    }

    /// Draw `bank_draws` bank items weighted by `mastery`, mint
    /// `template_draws` template items, then shuffle the lot.
    ///
    /// A small bank or template pool shortens the session instead of failing.
    pub fn build<R: Rng + ?Sized>(
        self,
        mastery: &MasteryMap,
        generator: &mut TemplateGenerator,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> SessionPlan {
        let drawn = sampler::draw(&self.bank.ids(), mastery, self.config.bank_draws, rng);
        let mut items: Vec<SessionItem> = drawn
            .into_iter()
            .filter_map(|id| self.bank.get(id).cloned())
            .map(SessionItem::from)
            .collect();
        let sampled = items.len();

        let minted = generator.generate(self.config.template_draws, now, rng);
        let generated = minted.len();
        items.extend(minted.into_iter().map(SessionItem::from));

        items.as_mut_slice().shuffle(rng);

        SessionPlan {
            items,
            sampled,
            generated,
        }
    }
}
