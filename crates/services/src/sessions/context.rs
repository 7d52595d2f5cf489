use quiz_core::QuizRng;
use quiz_core::generator::TemplateGenerator;
use quiz_core::model::MasteryMap;

use super::service::SessionService;

/// Everything one learner's quiz flow owns: the live mastery map, the random
/// source, the template generator with its id serial, and the current session.
///
/// Passed explicitly to every [`super::SessionLoopService`] operation; there is
/// no ambient session state.
#[derive(Debug)]
pub struct QuizContext {
    pub(crate) mastery: MasteryMap,
    pub(crate) rng: QuizRng,
    pub(crate) generator: TemplateGenerator,
    pub(crate) session: Option<SessionService>,
}

impl QuizContext {
    #[must_use]
    pub fn new(mastery: MasteryMap, rng: QuizRng) -> Self {
        Self {
            mastery,
            rng,
            generator: TemplateGenerator::standard(),
            session: None,
        }
    }

    #[must_use]
    pub fn mastery(&self) -> &MasteryMap {
        &self.mastery
    }

    #[must_use]
    pub fn session(&self) -> Option<&SessionService> {
        self.session.as_ref()
    }
}
