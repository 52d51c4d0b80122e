//! Annotated word records and their component types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Language;

// ---------------------------------------------------------------------------
// WordType
// ---------------------------------------------------------------------------

/// Grammatical category of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordType {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
    Interjection,
    Article,
    Numeral,
    Other,
}

impl WordType {
    pub const ALL: [WordType; 11] = [
        WordType::Noun,
        WordType::Verb,
        WordType::Adjective,
        WordType::Adverb,
        WordType::Pronoun,
        WordType::Preposition,
        WordType::Conjunction,
        WordType::Interjection,
        WordType::Article,
        WordType::Numeral,
        WordType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WordType::Noun => "noun",
            WordType::Verb => "verb",
            WordType::Adjective => "adjective",
            WordType::Adverb => "adverb",
            WordType::Pronoun => "pronoun",
            WordType::Preposition => "preposition",
            WordType::Conjunction => "conjunction",
            WordType::Interjection => "interjection",
            WordType::Article => "article",
            WordType::Numeral => "numeral",
            WordType::Other => "other",
        }
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown value: {0:?}")]
pub struct UnknownValue(pub String);

impl FromStr for WordType {
    type Err = UnknownValue;

    /// Case-insensitive match against the lower-case category names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        WordType::ALL
            .into_iter()
            .find(|t| t.as_str() == lowered)
            .ok_or(UnknownValue(lowered))
    }
}

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

/// Grammatical gender of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Neuter => "neuter",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "masculine" => Ok(Gender::Masculine),
            "feminine" => Ok(Gender::Feminine),
            "neuter" => Ok(Gender::Neuter),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Sub-results
// ---------------------------------------------------------------------------

/// Word type, gender and syllables, produced either by the LLM or by a
/// language fallback heuristic.
#[derive(Debug, Clone, PartialEq)]
pub struct LexicalAnnotation {
    pub word_type: WordType,
    pub gender: Option<Gender>,
    pub syllables: Vec<String>,
}

/// Audio / image availability for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAvailability {
    pub has_audio: bool,
    pub has_image: bool,
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A freshly synthesized annotation that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnnotatedWord {
    pub word: String,
    pub language: Language,
    pub word_type: WordType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub syllables: Vec<String>,
    pub safe_letters: Vec<String>,
    pub frequency: f64,
    pub has_audio: bool,
    pub has_image: bool,
    #[serde(rename = "proovedByTherapist")]
    pub proved_by_therapist: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewAnnotatedWord {
    /// Attach the identifier assigned by a store.
    pub fn with_id(self, id: u64) -> AnnotatedWord {
        AnnotatedWord {
            id,
            word: self.word,
            language: self.language,
            word_type: self.word_type,
            gender: self.gender,
            syllables: self.syllables,
            safe_letters: self.safe_letters,
            frequency: self.frequency,
            has_audio: self.has_audio,
            has_image: self.has_image,
            proved_by_therapist: self.proved_by_therapist,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A stored annotation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedWord {
    pub id: u64,
    pub word: String,
    pub language: Language,
    pub word_type: WordType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub syllables: Vec<String>,
    pub safe_letters: Vec<String>,
    pub frequency: f64,
    pub has_audio: bool,
    pub has_image: bool,
    #[serde(rename = "proovedByTherapist")]
    pub proved_by_therapist: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One entry of an annotation request.  `language` defaults to the
/// configured default language when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRequest {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl WordRequest {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            language: None,
        }
    }

    pub fn with_language(word: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            language: Some(language.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_type_parses_case_insensitively() {
        assert_eq!("Noun".parse::<WordType>(), Ok(WordType::Noun));
        assert_eq!(" VERB ".parse::<WordType>(), Ok(WordType::Verb));
        assert!("proper noun".parse::<WordType>().is_err());
    }

    #[test]
    fn gender_rejects_none() {
        assert_eq!("Feminine".parse::<Gender>(), Ok(Gender::Feminine));
        assert!("none".parse::<Gender>().is_err());
    }

    #[test]
    fn record_serializes_with_wire_names() {
        let now = Utc::now();
        let record = NewAnnotatedWord {
            word: "Haus".into(),
            language: Language::German,
            word_type: WordType::Noun,
            gender: None,
            syllables: vec!["Haus".into()],
            safe_letters: vec!["h".into(), "a".into(), "u".into()],
            frequency: 0.5,
            has_audio: true,
            has_image: false,
            proved_by_therapist: false,
            created_at: now,
            updated_at: now,
        }
        .with_id(7);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["wordType"], "noun");
        assert_eq!(json["language"], "de");
        assert_eq!(json["proovedByTherapist"], false);
        assert_eq!(json["safeLetters"][0], "h");
        assert!(json.get("gender").is_none());
    }

    #[test]
    fn request_language_is_optional() {
        let req: WordRequest = serde_json::from_str(r#"{"word":"Hund"}"#).unwrap();
        assert_eq!(req, WordRequest::new("Hund"));
    }
}
