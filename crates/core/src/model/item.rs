use crate::model::{Answer, QuestionId, TemplateItemId, TopicTag};

//
// ─── BANK ITEM ─────────────────────────────────────────────────────────────────
//

/// A fixed true/false statement from the static bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionItem {
    pub id: QuestionId,
    pub text: String,
    /// Literal answer as stored in the bank. May be overridden by the verifier.
    pub answer: Answer,
}

impl QuestionItem {
    #[must_use]
    pub fn new(id: QuestionId, text: impl Into<String>, answer: Answer) -> Self {
        Self {
            id,
            text: text.into(),
            answer,
        }
    }
}

//
// ─── TEMPLATE ITEM ─────────────────────────────────────────────────────────────
//

/// A true/false item minted from a template pair for a single session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateItem {
    pub id: TemplateItemId,
    pub text: String,
    pub answer: Answer,
    pub tag: TopicTag,
}

impl TemplateItem {
    #[must_use]
    pub fn base_id(&self) -> QuestionId {
        self.id.base()
    }
}

//
// ─── SESSION ITEM ──────────────────────────────────────────────────────────────
//

/// One entry of a session: either a bank question or a generated template item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionItem {
    Bank(QuestionItem),
    Template(TemplateItem),
}

impl SessionItem {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            SessionItem::Bank(item) => &item.text,
            SessionItem::Template(item) => &item.text,
        }
    }

    /// The answer as stored on the item, before any override.
    #[must_use]
    pub fn stored_answer(&self) -> Answer {
        match self {
            SessionItem::Bank(item) => item.answer,
            SessionItem::Template(item) => item.answer,
        }
    }

    /// Key into the mastery map (bank id, or the template's base id).
    #[must_use]
    pub fn mastery_key(&self) -> QuestionId {
        match self {
            SessionItem::Bank(item) => item.id,
            SessionItem::Template(item) => item.base_id(),
        }
    }

    /// Stable textual identity used by the durable log.
    #[must_use]
    pub fn item_key(&self) -> String {
        match self {
            SessionItem::Bank(item) => item.id.to_string(),
            SessionItem::Template(item) => item.id.to_string(),
        }
    }

    /// Topic tag carried by a template item; bank items have none.
    #[must_use]
    pub fn carried_tag(&self) -> Option<TopicTag> {
        match self {
            SessionItem::Bank(_) => None,
            SessionItem::Template(item) => Some(item.tag),
        }
    }

    #[must_use]
    pub fn is_generated(&self) -> bool {
        matches!(self, SessionItem::Template(_))
    }
}

impl From<QuestionItem> for SessionItem {
    fn from(item: QuestionItem) -> Self {
        SessionItem::Bank(item)
    }
}

impl From<TemplateItem> for SessionItem {
    fn from(item: TemplateItem) -> Self {
        SessionItem::Template(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn template_item_maps_to_base_mastery_key() {
        let item = SessionItem::from(TemplateItem {
            id: TemplateItemId::new(QuestionId::new(58), fixed_now(), 0, 0),
            text: "t".into(),
            answer: Answer::True,
            tag: TopicTag::Tooling,
        });

        assert_eq!(item.mastery_key(), QuestionId::new(58));
        assert!(item.item_key().starts_with("tpl-58-"));
        assert_eq!(item.carried_tag(), Some(TopicTag::Tooling));
        assert!(item.is_generated());
    }

    #[test]
    fn bank_item_uses_its_own_id() {
        let item = SessionItem::from(QuestionItem::new(QuestionId::new(7), "q", Answer::False));
        assert_eq!(item.mastery_key(), QuestionId::new(7));
        assert_eq!(item.item_key(), "7");
        assert_eq!(item.carried_tag(), None);
        assert!(!item.is_generated());
    }
}
