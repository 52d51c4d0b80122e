//! Fallback heuristics for German words.
//!
//! Capitalised words are taken to be nouns; noun gender comes from a small
//! suffix table checked in a fixed order (masculine, feminine, neuter).

use crate::model::{Gender, LexicalAnnotation, WordType};

use super::syllables::split_syllables;

/// German vowels, lower case.
pub const VOWELS: [char; 8] = ['a', 'e', 'i', 'o', 'u', 'ä', 'ö', 'ü'];

/// Gender suffix table.  Order matters: the first matching row wins.
const GENDER_SUFFIXES: &[(Gender, &[&str])] = &[
    (Gender::Masculine, &["er", "ig", "or"]),
    (Gender::Feminine, &["ung", "heit", "keit", "schaft", "tät"]),
    (Gender::Neuter, &["chen", "lein", "ment"]),
];

/// Annotate `word` from its surface form alone.
pub fn fallback(word: &str) -> LexicalAnnotation {
    log::debug!("fallback annotation for German word {word:?}");

    let is_noun = starts_with_capital(word);
    let word_type = if is_noun { WordType::Noun } else { WordType::Other };
    let gender = if is_noun { infer_gender(word) } else { None };

    LexicalAnnotation {
        word_type,
        gender,
        syllables: split_syllables(word, &VOWELS),
    }
}

/// `true` when the first character is one of `A`–`Z`, `Ä`, `Ö`, `Ü`.
fn starts_with_capital(word: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|c| c.is_ascii_uppercase() || matches!(c, 'Ä' | 'Ö' | 'Ü'))
}

/// Gender from the suffix table, `None` when no suffix matches.
pub fn infer_gender(word: &str) -> Option<Gender> {
    GENDER_SUFFIXES
        .iter()
        .find(|(_, suffixes)| suffixes.iter().any(|s| word.ends_with(s)))
        .map(|(gender, _)| *gender)
}
