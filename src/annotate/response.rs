//! Extraction of the annotation JSON object from free-form LLM output.
//!
//! Models often wrap the requested object in prose or code fences.  The
//! first balanced `{…}` object is located with a brace scanner that ignores
//! braces inside JSON strings, then read with `serde_json`.

use thiserror::Error;

/// Why an LLM response could not be used.  Always recovered by the language
/// fallback; never returned to callers of the orchestrator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseFailure {
    #[error("no JSON object found in LLM response")]
    NoJson,

    #[error("invalid JSON in LLM response: {0}")]
    InvalidJson(String),

    #[error("no word type found in LLM response")]
    MissingWordType,

    #[error("invalid syllables in LLM response")]
    InvalidSyllables,

    #[error("syllables {0:?} do not spell the word")]
    SyllablesMismatch(Vec<String>),
}

/// Fields read from the LLM answer before validation against the word.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAnnotation {
    pub word_type: String,
    pub gender: Option<String>,
    pub syllables: Vec<String>,
}

/// Return the first balanced `{…}` substring of `text`, if any.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Read `wordType`, `gender` and `syllables` out of an LLM response.
///
/// `wordType` and `gender` are lower-cased.  Fails when no object is found,
/// when `wordType` is missing or blank, or when `syllables` is not a
/// non-empty array of strings.
pub fn parse_raw(text: &str) -> Result<RawAnnotation, ParseFailure> {
    let object = extract_json_object(text).ok_or(ParseFailure::NoJson)?;
    let value: serde_json::Value =
        serde_json::from_str(object).map_err(|e| ParseFailure::InvalidJson(e.to_string()))?;

    let word_type = value["wordType"]
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ParseFailure::MissingWordType)?
        .to_lowercase();

    let gender = value["gender"].as_str().map(|g| g.trim().to_lowercase());

    let syllables: Vec<String> = value["syllables"]
        .as_array()
        .ok_or(ParseFailure::InvalidSyllables)?
        .iter()
        .map(|s| s.as_str().map(str::to_string))
        .collect::<Option<_>>()
        .ok_or(ParseFailure::InvalidSyllables)?;

    if syllables.is_empty() {
        return Err(ParseFailure::InvalidSyllables);
    }

    Ok(RawAnnotation {
        word_type,
        gender,
        syllables,
    })
}
