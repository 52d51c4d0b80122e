//! Language-specific annotation strategies.
//!
//! [`AnnotationStrategy`] bundles prompt construction, LLM-response parsing
//! and the deterministic fallback for one language.  The set of languages is
//! closed, so dispatch is a plain `match` over the variant.

use crate::llm::PromptBuilder;
use crate::model::{Gender, Language, LexicalAnnotation, WordType};

use super::response::{parse_raw, ParseFailure};
use super::{english, german};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationStrategy {
    German,
    English,
}

impl AnnotationStrategy {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::German => AnnotationStrategy::German,
            Language::English => AnnotationStrategy::English,
        }
    }

    /// Resolve a raw language code; unknown codes use the German strategy.
    pub fn for_code(code: &str) -> Self {
        Self::for_language(Language::from_code(code))
    }

    pub fn language(&self) -> Language {
        match self {
            AnnotationStrategy::German => Language::German,
            AnnotationStrategy::English => Language::English,
        }
    }

    /// Prompt asking the LLM for word type, gender (German) and syllables.
    pub fn create_prompt(&self, word: &str) -> String {
        PromptBuilder::new(self.language()).build(word)
    }

    /// Parse an LLM response, falling back to the heuristics when the
    /// response is unusable.  Never fails.
    pub fn parse_response(&self, raw: &str, word: &str) -> LexicalAnnotation {
        match self.try_parse(raw, word) {
            Ok(annotation) => annotation,
            Err(failure) => {
                log::warn!(
                    "failed to parse LLM response for {} word {word:?}: {failure}",
                    self.language().name()
                );
                log::debug!("raw LLM response: {raw}");
                self.fallback(word)
            }
        }
    }

    /// Strict parse of an LLM response for `word`.
    ///
    /// Unknown word types map to [`WordType::Other`].  A gender is kept only
    /// for nouns of a gendered language, and only when it names a known
    /// gender.  The syllables must concatenate to `word`.
    pub fn try_parse(&self, raw: &str, word: &str) -> Result<LexicalAnnotation, ParseFailure> {
        let parsed = parse_raw(raw)?;

        if parsed.syllables.concat() != word {
            return Err(ParseFailure::SyllablesMismatch(parsed.syllables));
        }

        let word_type = parsed.word_type.parse::<WordType>().unwrap_or_else(|e| {
            log::warn!("unrecognised word type for {word:?} ({e}), using \"other\"");
            WordType::Other
        });

        let gender = if word_type == WordType::Noun && self.language().has_gender() {
            parsed
                .gender
                .as_deref()
                .and_then(|g| g.parse::<Gender>().ok())
        } else {
            None
        };

        Ok(LexicalAnnotation {
            word_type,
            gender,
            syllables: parsed.syllables,
        })
    }

    /// Deterministic annotation from the word's surface form.
    pub fn fallback(&self, word: &str) -> LexicalAnnotation {
        match self {
            AnnotationStrategy::German => german::fallback(word),
            AnnotationStrategy::English => english::fallback(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_by_exact_code() {
        assert_eq!(AnnotationStrategy::for_code("en"), AnnotationStrategy::English);
        assert_eq!(AnnotationStrategy::for_code("de"), AnnotationStrategy::German);
        assert_eq!(AnnotationStrategy::for_code("it"), AnnotationStrategy::German);
    }

    #[test]
    fn german_prompt_names_word() {
        let prompt = AnnotationStrategy::German.create_prompt("Apfel");
        assert!(prompt.contains("German word \"Apfel\""));
    }

    #[test]
    fn parses_valid_german_response() {
        let raw = r#"Here you go: {"wordType": "Noun", "gender": "Masculine", "syllables": ["Ap", "fel"]}"#;
        let a = AnnotationStrategy::German.parse_response(raw, "Apfel");
        assert_eq!(a.word_type, WordType::Noun);
        assert_eq!(a.gender, Some(Gender::Masculine));
        assert_eq!(a.syllables, vec!["Ap", "fel"]);
    }

    #[test]
    fn english_drops_gender() {
        let raw = r#"{"wordType": "noun", "gender": "neuter", "syllables": ["ap", "ple"]}"#;
        let a = AnnotationStrategy::English.parse_response(raw, "apple");
        assert_eq!(a.word_type, WordType::Noun);
        assert_eq!(a.gender, None);
    }

    #[test]
    fn gender_dropped_for_non_nouns_and_unknown_values() {
        let verb = r#"{"wordType": "verb", "gender": "feminine", "syllables": ["lau", "fen"]}"#;
        assert_eq!(AnnotationStrategy::German.parse_response(verb, "laufen").gender, None);

        let none = r#"{"wordType": "noun", "gender": "none", "syllables": ["Haus"]}"#;
        let a = AnnotationStrategy::German.parse_response(none, "Haus");
        assert_eq!(a.word_type, WordType::Noun);
        assert_eq!(a.gender, None);
    }

    #[test]
    fn unknown_word_type_becomes_other() {
        let raw = r#"{"wordType": "proper noun", "syllables": ["Ber", "lin"]}"#;
        let a = AnnotationStrategy::German.parse_response(raw, "Berlin");
        assert_eq!(a.word_type, WordType::Other);
    }

    #[test]
    fn malformed_response_falls_back() {
        let a = AnnotationStrategy::German.parse_response("I don't know.", "Lehrer");
        assert_eq!(a, german::fallback("Lehrer"));

        let b = AnnotationStrategy::English.parse_response(r#"{"syllables": ["run"]}"#, "running");
        assert_eq!(b, english::fallback("running"));
    }

    #[test]
    fn mismatched_syllables_fall_back() {
        let raw = r#"{"wordType": "noun", "gender": "feminine", "syllables": ["kat", "ze"]}"#;
        assert!(matches!(
            AnnotationStrategy::German.try_parse(raw, "Katze"),
            Err(ParseFailure::SyllablesMismatch(_))
        ));
        let a = AnnotationStrategy::German.parse_response(raw, "Katze");
        assert_eq!(a.syllables, vec!["Kat", "ze"]);
        assert_eq!(a.gender, None);
    }

    #[test]
    fn fallback_dispatches_by_language() {
        assert_eq!(
            AnnotationStrategy::German.fallback("running").word_type,
            WordType::Other
        );
        assert_eq!(
            AnnotationStrategy::English.fallback("running").word_type,
            WordType::Verb
        );
    }
}
