//! Starter vocabulary.

use crate::model::{Language, WordRequest};

/// Common German nouns used to populate an empty store.
pub const SEED_WORDS: [&str; 10] = [
    "Haus", "Katze", "Hund", "Buch", "Tisch", "Stuhl", "Auto", "Baum", "Sonne", "Mond",
];

/// [`SEED_WORDS`] as German batch requests.
pub fn seed_requests() -> Vec<WordRequest> {
    SEED_WORDS
        .iter()
        .map(|w| WordRequest::with_language(*w, Language::German.code()))
        .collect()
}
