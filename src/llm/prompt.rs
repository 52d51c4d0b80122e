//! Prompt builder for word annotation.
//!
//! [`PromptBuilder`] asks the LLM for the word type, the gender (for
//! languages with grammatical gender) and the syllables of one word, and
//! embeds a JSON example so the answer comes back in a parseable shape.
//!
//! Instructions are written in English for every language.

use crate::model::Language;

// ---------------------------------------------------------------------------
// Instructions
// ---------------------------------------------------------------------------

const FIELDS_WITH_GENDER: &str = "\
1. wordType: The grammatical type (noun, verb, adjective, etc.)
2. gender: For nouns, specify the gender (masculine, feminine, neuter)
3. syllables: Break the word into syllables";

const FIELDS_WITHOUT_GENDER: &str = "\
1. wordType: The grammatical type (noun, verb, adjective, etc.)
2. syllables: Break the word into syllables";

// ---------------------------------------------------------------------------
// Example responses
// ---------------------------------------------------------------------------

const EXAMPLE_DE: &str = r#"{
  "wordType": "noun",
  "gender": "masculine",
  "syllables": ["Ap", "fel"]
}"#;

const EXAMPLE_EN: &str = r#"{
  "wordType": "noun",
  "syllables": ["ap", "ple"]
}"#;

// ---------------------------------------------------------------------------
// PromptBuilder
// ---------------------------------------------------------------------------

/// Builds annotation prompts for one language.
///
/// # Example
/// ```rust
/// use word_annotator::llm::PromptBuilder;
/// use word_annotator::model::Language;
///
/// let prompt = PromptBuilder::new(Language::German).build("Apfel");
/// assert!(prompt.contains("\"Apfel\""));
/// assert!(prompt.contains("gender"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder {
    language: Language,
}

impl PromptBuilder {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Build the full prompt for `word`.
    pub fn build(&self, word: &str) -> String {
        let mut prompt = String::with_capacity(512);
        prompt.push_str(&format!(
            "Analyze the {} word \"{}\" and provide the following information in JSON format:\n\n",
            self.language.name(),
            word
        ));
        prompt.push_str(self.fields());
        prompt.push_str("\n\nExample response format:\n");
        prompt.push_str(self.example());
        prompt
    }

    fn fields(&self) -> &'static str {
        if self.language.has_gender() {
            FIELDS_WITH_GENDER
        } else {
            FIELDS_WITHOUT_GENDER
        }
    }

    fn example(&self) -> &'static str {
        match self.language {
            Language::German => EXAMPLE_DE,
            Language::English => EXAMPLE_EN,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
