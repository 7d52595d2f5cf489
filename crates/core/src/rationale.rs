//! Explanations shown next to missed or skipped items.

use crate::bank::rationale_by_id;
use crate::model::{Answer, SessionItem};
use crate::text::{contains_any, contains_in_order, normalize};
use crate::verifier::canonical_answer;

const AGREES_WITH_BASICS: &str = "きほん に あっているから";
const CONTRADICTS_BASICS: &str = "きほん に そわないから";

struct RationaleRule {
    matches: fn(&str) -> bool,
    text: &'static str,
}

/// Text rules for items without a hand-written explanation. First match wins.
const RULES: &[RationaleRule] = &[
    RationaleRule {
        matches: |t| contains_any(t, &["とびおり", "てんばん"]),
        text: "あぶないから",
    },
    RationaleRule {
        matches: |t| t.contains("あんぜんたい"),
        text: "おちる きけんを ふせぐから",
    },
    RationaleRule {
        matches: |t| t.contains("あんぜんつうろ"),
        text: "たいひ の じゃまに なるから",
    },
    RationaleRule {
        matches: |t| t.contains("しんなー"),
        text: "かんきが ひつようだから",
    },
    RationaleRule {
        matches: |t| contains_any(t, &["しょうかき", "しょうかせん"]),
        text: "しょうか の じゃまに なるから",
    },
    RationaleRule {
        matches: |t| contains_any(t, &["かきげんきん", "すとーぶ"]),
        text: "ひが でて あぶないから",
    },
    RationaleRule {
        matches: |t| contains_any(t, &["びにる", "びにーる"]) && t.contains("つかわれません"),
        text: "ビニールクロス も あるから",
    },
    RationaleRule {
        matches: |t| t.contains("おりもの") && t.contains("つかわれません"),
        text: "おりもの クロス も あるから",
    },
    RationaleRule {
        matches: |t| {
            t.contains("せっちゃくざい") && contains_any(t, &["かわりません", "かわります"])
        },
        text: "かわくと ちからが へるから",
    },
    RationaleRule {
        matches: |t| contains_any(t, &["しーらー", "ぷらいまー"]),
        text: "したじ の つきを よくするから",
    },
    RationaleRule {
        matches: |t| t.contains("じべら") && t.contains("せつだん"),
        text: "きる のは はさみ や カッター だから",
    },
    RationaleRule {
        matches: |t| t.contains("ろーらー") && t.contains("つかいません"),
        text: "じょいんと は ローラー で おさえるから",
    },
    RationaleRule {
        matches: |t| t.contains("すんぽうとおなじおおきさ"),
        text: "よぶん を きって ぴったり に するから",
    },
    RationaleRule {
        matches: |t| t.contains("でんげんがこしょう") && t.contains("そのまま"),
        text: "プラグ を ぬいて しらべるから",
    },
    RationaleRule {
        matches: |t| t.contains("ふねんざいりょう"),
        text: "かべがみ は ふねん では ないから",
    },
    RationaleRule {
        matches: |t| contains_in_order(t, &["いりすみ", "そとがわ"]),
        text: "いりすみ は うちがわ だから",
    },
    RationaleRule {
        matches: |t| contains_in_order(t, &["ですみ", "うちがわ"]),
        text: "ですみ は そとがわ だから",
    },
    RationaleRule {
        matches: |t| t.contains("よこめのほうがひっぱり"),
        text: "たてめ の ほう が つよいから",
    },
    RationaleRule {
        matches: |t| contains_any(t, &["くらいいろ", "こいいろ"]) && t.contains("ひろくみせたい"),
        text: "あかるい いろ の ほうが ひろく みえるから",
    },
];

/// Rule-based explanation for `text`, falling back on the canonical answer.
#[must_use]
pub fn rule_rationale(text: &str, canonical: Answer) -> &'static str {
    let normalized = normalize(text);
    RULES
        .iter()
        .find(|rule| (rule.matches)(&normalized))
        .map_or_else(
            || match canonical {
                Answer::True => AGREES_WITH_BASICS,
                Answer::False => CONTRADICTS_BASICS,
            },
            |rule| rule.text,
        )
}

/// Explanation for `item`: the hand-written entry for bank items when one
/// exists, otherwise the text rules. Generated items always use the rules.
#[must_use]
pub fn rationale_for(item: &SessionItem) -> &'static str {
    let by_id = match item {
        SessionItem::Bank(q) => rationale_by_id(q.id),
        SessionItem::Template(_) => None,
    };
    by_id.unwrap_or_else(|| rule_rationale(item.text(), canonical_answer(item)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::QuestionBank;
    use crate::model::{QuestionId, QuestionItem, TemplateItem, TemplateItemId, TopicTag};
    use crate::time::fixed_now;

    #[test]
    fn every_bank_item_has_a_hand_written_rationale() {
        let bank = QuestionBank::standard();
        for q in bank.items() {
            assert!(rationale_by_id(q.id).is_some(), "missing rationale for {}", q.id.value());
        }
    }

    #[test]
    fn bank_lookup_wins_over_rules() {
        let bank = QuestionBank::standard();
        let item = SessionItem::from(bank.get(QuestionId::new(6)).unwrap().clone());
        assert_eq!(rationale_for(&item), "てんばん に のる と てんとう の きけん が ある から。");
    }

    #[test]
    fn template_items_use_rules_even_when_base_has_an_entry() {
        let item = SessionItem::from(TemplateItem {
            id: TemplateItemId::new(QuestionId::new(12), fixed_now(), 0, 0),
            text: "きゃたつは、 ひくければ とびおりても よいです。".into(),
            answer: Answer::False,
            tag: TopicTag::Safety,
        });
        assert_eq!(rationale_for(&item), "あぶないから");
    }

    #[test]
    fn rules_match_either_kana_spelling() {
        assert_eq!(
            rule_rationale("ローラーは じょいんとに つかいません。", Answer::False),
            "じょいんと は ローラー で おさえるから"
        );
        assert_eq!(
            rule_rationale("かきげんきんの ばしょで ストーブを つかう", Answer::False),
            "ひが でて あぶないから"
        );
    }

    #[test]
    fn ordered_rules_respect_precedence() {
        // Mentions both the top plate and thinner; the top plate rule comes first.
        assert_eq!(
            rule_rationale("てんばんの うえで シンナーを つかう", Answer::False),
            "あぶないから"
        );
    }

    #[test]
    fn inner_and_outer_corner_rules_need_order() {
        assert_eq!(
            rule_rationale("いりすみは そとがわの かどです。", Answer::False),
            "いりすみ は うちがわ だから"
        );
        assert_eq!(
            rule_rationale("ですみは うちがわの かどです。", Answer::False),
            "ですみ は そとがわ だから"
        );
    }

    #[test]
    fn fallback_follows_canonical_answer() {
        let item = SessionItem::from(QuestionItem::new(
            QuestionId::new(999),
            "へやの なかで しんなーを つかうときは まどを あけます。",
            Answer::False,
        ));
        // Thinner rule matches before any fallback.
        assert_eq!(rationale_for(&item), "かんきが ひつようだから");

        assert_eq!(rule_rationale("なにも あてはまらない", Answer::True), AGREES_WITH_BASICS);
        assert_eq!(rule_rationale("なにも あてはまらない", Answer::False), CONTRADICTS_BASICS);
    }
}
