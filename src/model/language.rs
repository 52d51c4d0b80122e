//! Supported word languages.
//!
//! The supported set is closed: German (`de`) and English (`en`).  Any other
//! code resolves to German, the default language of the vocabulary tool.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A language the annotation pipeline has a strategy for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Language {
    /// German, with grammatical gender for nouns.
    #[default]
    #[serde(rename = "de")]
    German,
    /// English, no grammatical gender.
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Every supported language, in display order.
    pub const ALL: [Language; 2] = [Language::German, Language::English];

    /// Resolve an ISO-639-1 code by exact match; unknown codes map to German.
    pub fn from_code(code: &str) -> Self {
        match code {
            "de" => Language::German,
            "en" => Language::English,
            other => {
                log::debug!("unsupported language code {other:?}, using German");
                Language::German
            }
        }
    }

    /// ISO-639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::German => "de",
            Language::English => "en",
        }
    }

    /// English name, used inside LLM prompts.
    pub fn name(&self) -> &'static str {
        match self {
            Language::German => "German",
            Language::English => "English",
        }
    }

    /// Whether nouns in this language carry a grammatical gender.
    pub fn has_gender(&self) -> bool {
        matches!(self, Language::German)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_codes_resolve() {
        assert_eq!(Language::from_code("de"), Language::German);
        assert_eq!(Language::from_code("en"), Language::English);
    }

    #[test]
    fn unknown_codes_default_to_german() {
        assert_eq!(Language::from_code("fr"), Language::German);
        assert_eq!(Language::from_code(""), Language::German);
        // Match is exact, not case-insensitive.
        assert_eq!(Language::from_code("EN"), Language::German);
    }

    #[test]
    fn serializes_as_code() {
        let json = serde_json::to_string(&Language::English).unwrap();
        assert_eq!(json, "\"en\"");
        let back: Language = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(back, Language::German);
    }

    #[test]
    fn only_german_has_gender() {
        assert!(Language::German.has_gender());
        assert!(!Language::English.has_gender());
    }
}
