//! Topic tagging and justification scoring.

use crate::model::{JustificationScore, SessionItem, TopicTag};
use crate::text::{contains_any, fold_kana, normalize};

/// Tag vocabulary, checked in order. Safety vocabulary wins over tooling
/// vocabulary when an item mentions both.
const TAG_GROUPS: &[(TopicTag, &[&str])] = &[
    (
        TopicTag::Safety,
        &[
            "あんぜん",
            "きゃたつ",
            "てんばん",
            "いのちづな",
            "あんぜんたい",
            "あんぜんつうろ",
            "しょうかき",
            "しょうかせん",
            "しんなー",
            "かきげんきん",
            "さいん",
            "あごひも",
        ],
    ),
    (
        TopicTag::Tooling,
        &[
            "ぱてべら",
            "じべら",
            "くしばけ",
            "なでばけ",
            "ろーらー",
            "はさみ",
            "かったー",
            "めじゃー",
            "みずいと",
            "かっとてーぷ",
            "したじきてーぷ",
            "しーらー",
            "ぷらいまー",
        ],
    ),
];

const DEFAULT_TAG: TopicTag = TopicTag::Procedure;

/// Keywords a good justification is expected to mention, per tag.
#[must_use]
pub fn keywords(tag: TopicTag) -> &'static [&'static str] {
    match tag {
        TopicTag::Safety => &["あぶない", "きけん", "おちる", "てんとう", "やけど", "かんき"],
        TopicTag::Tooling => &["どうぐ", "つかう", "のり", "きる", "ならす", "おさえる"],
        TopicTag::Procedure => &["したじ", "じょいんと", "すんぽう", "ぴったり", "かわく", "こはん"],
    }
}

/// Assign a tag from the item text; the first matching group wins.
#[must_use]
pub fn classify_tag(text: &str) -> TopicTag {
    let normalized = normalize(text);
    TAG_GROUPS
        .iter()
        .find(|(_, words)| contains_any(&normalized, words))
        .map_or(DEFAULT_TAG, |(tag, _)| *tag)
}

/// Tag used for scoring a session item: the carried tag of a template item,
/// otherwise the classified tag of its text.
#[must_use]
pub fn tag_for(item: &SessionItem) -> TopicTag {
    item.carried_tag()
        .unwrap_or_else(|| classify_tag(item.text()))
}

/// Count distinct tag keywords present in `justification`.
#[must_use]
pub fn score_justification(justification: &str, tag: TopicTag) -> JustificationScore {
    if justification.is_empty() {
        return JustificationScore::Missing;
    }
    let folded = fold_kana(justification);
    let hits = keywords(tag)
        .iter()
        .filter(|kw| folded.contains(*kw))
        .count();
    JustificationScore::from_hits(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Answer, QuestionId, TemplateItem, TemplateItemId};
    use crate::time::fixed_now;

    #[test]
    fn safety_takes_precedence_over_tooling() {
        // Mentions both a stepladder and a roller.
        assert_eq!(
            classify_tag("きゃたつの うえで ローラーを つかいます。"),
            TopicTag::Safety
        );
    }

    #[test]
    fn katakana_spelling_still_classifies() {
        assert_eq!(classify_tag("クシばけは、 かべがみの のりつけに つかいます。"), TopicTag::Tooling);
        assert_eq!(classify_tag("パテべらは したじを たいらにする"), TopicTag::Tooling);
        assert_eq!(classify_tag("🚫 の サインの ばしょ"), TopicTag::Safety);
    }

    #[test]
    fn unmatched_text_falls_back_to_procedure() {
        assert_eq!(classify_tag("かべがみには むじのものは、 ありません。"), TopicTag::Procedure);
    }

    #[test]
    fn template_items_keep_their_carried_tag() {
        let item = SessionItem::from(TemplateItem {
            id: TemplateItemId::new(QuestionId::new(32), fixed_now(), 0, 0),
            // Text classifies as tooling, the pair says procedure.
            text: "しーらーや ぷらいまーは したじの つきを よくするために つかいます。".into(),
            answer: Answer::True,
            tag: TopicTag::Procedure,
        });
        assert_eq!(tag_for(&item), TopicTag::Procedure);
    }

    #[test]
    fn empty_justification_scores_zero_for_every_tag() {
        for tag in TopicTag::ALL {
            assert_eq!(score_justification("", tag).value(), 0);
        }
    }

    #[test]
    fn score_counts_keyword_hits() {
        assert_eq!(score_justification("なんとなく", TopicTag::Safety).value(), 0);
        assert_eq!(score_justification("おちるから", TopicTag::Safety).value(), 1);
        assert_eq!(score_justification("おちる きけんが ある", TopicTag::Safety).value(), 2);
        assert_eq!(
            score_justification("あぶない きけん おちる", TopicTag::Safety).value(),
            2
        );
    }

    #[test]
    fn score_uses_the_tags_own_keywords() {
        assert_eq!(score_justification("おちる きけん", TopicTag::Tooling).value(), 0);
        assert_eq!(score_justification("ノリを ぬる どうぐ", TopicTag::Tooling).value(), 2);
    }
}
