//! Vowel/consonant transition syllable splitter shared by all languages.
//!
//! The split is an approximation: a boundary is placed after a
//! vowel→consonant transition once the running syllable holds at least two
//! characters, never on the final character.  Concatenating the output always
//! reproduces the input exactly.

/// Split `word` into syllable-like chunks using the given vowel set.
///
/// Vowel membership is tested on the lower-cased character, so `vowels`
/// should hold lower-case letters only.  Words of three characters or fewer
/// are returned whole.
pub fn split_syllables(word: &str, vowels: &[char]) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 3 {
        return vec![word.to_string()];
    }

    let is_vowel = |c: char| c.to_lowercase().any(|l| vowels.contains(&l));
    let last = chars.len() - 1;

    let mut syllables = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for (i, &c) in chars.iter().enumerate() {
        current.push(c);
        current_len += 1;

        if i > 0 && is_vowel(chars[i - 1]) && !is_vowel(c) && current_len >= 2 && i < last {
            syllables.push(std::mem::take(&mut current));
            current_len = 0;
        }
    }

    if !current.is_empty() {
        syllables.push(current);
    }

    if syllables.is_empty() {
        vec![word.to_string()]
    } else {
        syllables
    }
}
