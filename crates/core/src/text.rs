//! Text normalization shared by tagging, overrides, rationales and scoring.
//!
//! The bank mixes hiragana and katakana spellings of the same word
//! (ローラー / ろーらー) and uses spaces freely, so every matcher works on
//! a folded form: katakana mapped to hiragana, whitespace removed.

const KATAKANA_START: u32 = 0x30A1;
const KATAKANA_END: u32 = 0x30F6;
const KANA_OFFSET: u32 = 0x60;

/// Map katakana letters onto their hiragana counterparts. Other characters,
/// including the prolonged sound mark `ー`, pass through unchanged.
#[must_use]
pub fn fold_kana(text: &str) -> String {
    text.chars()
        .map(|c| {
            let code = u32::from(c);
            if (KATAKANA_START..=KATAKANA_END).contains(&code) {
                char::from_u32(code - KANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Folded form of an item text used for keyword matching.
#[must_use]
pub fn normalize(text: &str) -> String {
    fold_kana(text).chars().filter(|c| !c.is_whitespace()).collect()
}

/// True if any of `needles` occurs in `haystack`.
#[must_use]
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// True if every needle occurs, each one after the end of the previous match.
#[must_use]
pub fn contains_in_order(haystack: &str, needles: &[&str]) -> bool {
    let mut rest = haystack;
    for needle in needles {
        match rest.find(needle) {
            Some(pos) => rest = &rest[pos + needle.len()..],
            None => return false,
        }
    }
    true
}
