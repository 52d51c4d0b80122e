//! Fallback heuristics for English words.

use crate::model::{LexicalAnnotation, WordType};

use super::syllables::split_syllables;

/// English vowels, lower case.  `y` is treated as a vowel.
pub const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

const NOUN_SUFFIXES: &[&str] = &["ment", "ness", "ity"];
const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "less", "ish", "ive", "ous", "able"];

/// Annotate `word` from its surface form alone.  English has no gender.
pub fn fallback(word: &str) -> LexicalAnnotation {
    log::debug!("fallback annotation for English word {word:?}");

    LexicalAnnotation {
        word_type: infer_word_type(word),
        gender: None,
        syllables: split_syllables(word, &VOWELS),
    }
}

/// Word type from suffix rules, checked in order.
pub fn infer_word_type(word: &str) -> WordType {
    let len = word.chars().count();
    let ends_with_any = |suffixes: &[&str]| suffixes.iter().any(|s| word.ends_with(s));

    if word.ends_with("ing") && len > 4 {
        WordType::Verb
    } else if word.ends_with("ly") && len > 3 {
        WordType::Adverb
    } else if ends_with_any(NOUN_SUFFIXES) {
        WordType::Noun
    } else if ends_with_any(ADJECTIVE_SUFFIXES) {
        WordType::Adjective
    } else {
        WordType::Other
    }
}
