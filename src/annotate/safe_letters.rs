//! Safe-letter selection for word-completion exercises.
//!
//! The selection always starts with the first letter, adds every vowel, then
//! the last letter, deduplicates, and keeps at most 60 % of the word length
//! (rounded up).  One vowel set, German umlauts included, is used for every
//! language.

use thiserror::Error;

/// Vowels offered as hints, lower case.
pub const SAFE_VOWELS: [char; 8] = ['a', 'e', 'i', 'o', 'u', 'ä', 'ö', 'ü'];

#[derive(Debug, Clone, PartialEq, Error)]
enum SelectionError {
    #[error("word is empty")]
    EmptyWord,
}

/// Select the safe letters of `word`, lower-cased, in first-seen order.
///
/// Never fails: if the selection cannot run, the first and last lower-cased
/// characters are returned instead.
pub fn safe_letters(word: &str) -> Vec<String> {
    match select(word) {
        Ok(letters) => {
            log::debug!("safe letters for {word:?}: {}", letters.join(", "));
            letters
        }
        Err(e) => {
            log::error!("error determining safe letters for {word:?}: {e}");
            degraded(word)
        }
    }
}

/// `ceil(0.6 × len)` in integer arithmetic.
pub fn max_safe_letters(len: usize) -> usize {
    (3 * len + 4) / 5
}

fn select(word: &str) -> Result<Vec<String>, SelectionError> {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    let (&first, &last) = chars
        .first()
        .zip(chars.last())
        .ok_or(SelectionError::EmptyWord)?;

    let mut picked = vec![first];
    picked.extend(chars[1..].iter().copied().filter(|c| SAFE_VOWELS.contains(c)));
    if !picked.contains(&last) {
        picked.push(last);
    }

    let mut unique: Vec<char> = Vec::with_capacity(picked.len());
    for c in picked {
        if !unique.contains(&c) {
            unique.push(c);
        }
    }
    unique.truncate(max_safe_letters(chars.len()));

    Ok(unique.into_iter().map(String::from).collect())
}

/// First and last lower-cased characters; empty for an empty word.
fn degraded(word: &str) -> Vec<String> {
    let lowered = word.to_lowercase();
    let mut chars = lowered.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => vec![first.to_string(), last.to_string()],
        (Some(only), None) => vec![only.to_string(), only.to_string()],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(word: &str) -> Vec<String> {
        safe_letters(word)
    }

    #[test]
    fn haus_truncates_last_letter() {
        // h, a, u, s → capped at ceil(2.4) = 3.
        assert_eq!(letters("Haus"), vec!["h", "a", "u"]);
    }

    #[test]
    fn katze_keeps_first_vowels_and_last() {
        // k, a, e (last letter is already a vowel) → cap 3.
        assert_eq!(letters("Katze"), vec!["k", "a", "e"]);
    }

    #[test]
    fn duplicates_removed_in_first_seen_order() {
        // b + vowels a, a, a; the last 'a' is already present.
        assert_eq!(letters("Banana"), vec!["b", "a"]);
        assert_eq!(letters("Lehrer"), vec!["l", "e", "r"]);
    }

    #[test]
    fn umlauts_are_vowels_for_every_word() {
        assert_eq!(letters("Mädchen"), vec!["m", "ä", "e", "n"]);
    }

    #[test]
    fn single_letter_word() {
        assert_eq!(letters("A"), vec!["a"]);
    }

    #[test]
    fn empty_word_degrades_to_nothing() {
        assert!(letters("").is_empty());
    }

    #[test]
    fn degraded_result_uses_first_and_last() {
        assert_eq!(degraded("Tisch"), vec!["t", "h"]);
        assert_eq!(degraded("Ö"), vec!["ö", "ö"]);
    }

    #[test]
    fn cap_is_ceiling_of_sixty_percent() {
        assert_eq!(max_safe_letters(1), 1);
        assert_eq!(max_safe_letters(3), 2);
        assert_eq!(max_safe_letters(4), 3);
        assert_eq!(max_safe_letters(5), 3);
        assert_eq!(max_safe_letters(10), 6);
        assert_eq!(max_safe_letters(11), 7);
    }

    #[test]
    fn properties_hold_for_sample_words() {
        let words = [
            "Haus", "Katze", "Hund", "Buch", "Tisch", "Stuhl", "Auto", "Baum", "Sonne", "Mond",
            "Schmetterling", "aeiouäöü", "rhythm", "Übung",
        ];
        for word in words {
            let result = letters(word);
            let lowered: Vec<char> = word.to_lowercase().chars().collect();

            assert!(result.len() <= max_safe_letters(lowered.len()), "{word}");
            assert!(result.iter().all(|l| l.chars().count() == 1), "{word}");
            assert_eq!(result[0], lowered[0].to_string(), "{word}");

            let mut deduped = result.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), result.len(), "{word} has duplicates");

            // With room under the cap nothing is cut: the last letter and
            // every vowel after the first letter are present.
            let mut wanted: Vec<char> = vec![lowered[0]];
            wanted.extend(lowered[1..].iter().filter(|c| SAFE_VOWELS.contains(c)));
            wanted.push(lowered[lowered.len() - 1]);
            wanted.sort();
            wanted.dedup();
            if wanted.len() <= max_safe_letters(lowered.len()) {
                for c in wanted {
                    assert!(result.contains(&c.to_string()), "{word} lacks {c:?}");
                }
            }
        }
    }

    #[test]
    fn last_letter_kept_when_cap_allows() {
        // t, i, then the last letter h; cap 3.
        assert_eq!(letters("Tisch"), vec!["t", "i", "h"]);
        // The last letter is already among the vowels.
        assert_eq!(letters("Sonne"), vec!["s", "o", "e"]);
        // s, i, e, n under a cap of 5.
        assert_eq!(letters("Spiegeln"), vec!["s", "i", "e", "n"]);
    }
}
