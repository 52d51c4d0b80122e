//! Annotation facade: one word in, one merged record out.
//!
//! The four sub-annotations (lexical, frequency, safe letters, media) are
//! independent and run concurrently under `tokio::join!`; the record is only
//! built once all four have finished.

use chrono::Utc;

use crate::config::AppConfig;
use crate::error::AnnotationError;
use crate::model::{Language, NewAnnotatedWord};

use super::frequency::FrequencyEstimator;
use super::lexical::LexicalAnnotator;
use super::media::MediaEstimator;
use super::safe_letters::safe_letters;
use super::strategy::AnnotationStrategy;

pub struct Annotator {
    lexical: LexicalAnnotator,
    frequency: FrequencyEstimator,
    media: MediaEstimator,
}

impl Annotator {
    pub fn new(
        lexical: LexicalAnnotator,
        frequency: FrequencyEstimator,
        media: MediaEstimator,
    ) -> Self {
        Self {
            lexical,
            frequency,
            media,
        }
    }

    /// Annotator that uses only the deterministic fallbacks and mocks.
    pub fn offline() -> Self {
        Self::new(
            LexicalAnnotator::offline(),
            FrequencyEstimator::offline(),
            MediaEstimator::offline(),
        )
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            LexicalAnnotator::from_config(&config.llm),
            FrequencyEstimator::from_config(&config.frequency),
            MediaEstimator::from_config(&config.media),
        )
    }

    /// Annotate `word` in `language`.
    ///
    /// Fails only on an LLM transport error or a media-service error.
    pub async fn annotate(
        &self,
        word: &str,
        language: Language,
    ) -> Result<NewAnnotatedWord, AnnotationError> {
        let strategy = AnnotationStrategy::for_language(language);
        log::info!("annotating {word:?} ({})", language.name());

        let (lexical, frequency, letters, media) = tokio::join!(
            self.lexical.annotate(word, strategy),
            self.frequency.estimate(word, language),
            async { safe_letters(word) },
            self.media.estimate(word, language),
        );
        let lexical = lexical?;
        let media = media?;

        let now = Utc::now();
        Ok(NewAnnotatedWord {
            word: word.to_string(),
            language,
            word_type: lexical.word_type,
            gender: lexical.gender,
            syllables: lexical.syllables,
            safe_letters: letters,
            frequency,
            has_audio: media.has_audio,
            has_image: media.has_image,
            proved_by_therapist: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Annotate with a raw language code; unknown codes are treated as German.
    pub async fn annotate_code(
        &self,
        word: &str,
        code: &str,
    ) -> Result<NewAnnotatedWord, AnnotationError> {
        self.annotate(word, Language::from_code(code)).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::annotate::frequency::{mock_frequency, FrequencySource};
    use crate::annotate::http::ServiceError;
    use crate::annotate::media::{mock_availability, MediaSource};
    use crate::llm::{CompletionParams, LlmClient, LlmError};
    use crate::model::{Gender, MediaAvailability, WordType};

    struct Reply(&'static str);

    #[async_trait]
    impl LlmClient for Reply {
        async fn send(&self, _prompt: &str, _params: &CompletionParams) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct TimedOutLlm;

    #[async_trait]
    impl LlmClient for TimedOutLlm {
        async fn send(&self, _prompt: &str, _params: &CompletionParams) -> Result<String, LlmError> {
            Err(LlmError::Timeout)
        }
    }

    struct DownFrequency;

    #[async_trait]
    impl FrequencySource for DownFrequency {
        async fn query(&self, _word: &str, _language: Language) -> Result<f64, ServiceError> {
            Err(ServiceError::Request("connection refused".into()))
        }
    }

    struct DownMedia;

    #[async_trait]
    impl MediaSource for DownMedia {
        async fn query(
            &self,
            _word: &str,
            _language: Language,
        ) -> Result<MediaAvailability, ServiceError> {
            Err(ServiceError::Status(500))
        }
    }

    fn with_llm(client: impl LlmClient + 'static) -> Annotator {
        Annotator::new(
            LexicalAnnotator::new(Arc::new(client), CompletionParams::default()),
            FrequencyEstimator::offline(),
            MediaEstimator::offline(),
        )
    }

    #[tokio::test]
    async fn haus_offline_end_to_end() {
        let record = Annotator::offline()
            .annotate_code("Haus", "de")
            .await
            .unwrap();

        assert_eq!(record.word, "Haus");
        assert_eq!(record.language, Language::German);
        assert_eq!(record.word_type, WordType::Noun);
        assert_eq!(record.syllables.concat(), "Haus");
        assert_eq!(record.safe_letters[0], "h");
        assert!(record.safe_letters.contains(&"a".to_string()));
        assert!((0.01..=0.99).contains(&record.frequency));
        assert_eq!(record.frequency, mock_frequency("Haus"));
        let media = mock_availability("Haus");
        assert_eq!(record.has_audio, media.has_audio);
        assert_eq!(record.has_image, media.has_image);
        assert!(!record.proved_by_therapist);
        assert_eq!(record.created_at, record.updated_at);
    }

    #[tokio::test]
    async fn unknown_language_code_uses_german() {
        let record = Annotator::offline()
            .annotate_code("Lehrer", "fr")
            .await
            .unwrap();
        assert_eq!(record.language, Language::German);
        assert_eq!(record.gender, Some(Gender::Masculine));
    }

    #[tokio::test]
    async fn english_word_offline() {
        let record = Annotator::offline()
            .annotate("running", Language::English)
            .await
            .unwrap();
        assert_eq!(record.word_type, WordType::Verb);
        assert_eq!(record.gender, None);
        assert_eq!(record.syllables.concat(), "running");
    }

    #[tokio::test]
    async fn llm_reply_is_merged() {
        let annotator = with_llm(Reply(
            r#"{"wordType": "noun", "gender": "neuter", "syllables": ["Haus"]}"#,
        ));
        let record = annotator.annotate("Haus", Language::German).await.unwrap();
        assert_eq!(record.gender, Some(Gender::Neuter));
        assert_eq!(record.syllables, vec!["Haus"]);
    }

    #[tokio::test]
    async fn llm_parse_failure_is_absorbed() {
        let annotator = with_llm(Reply("not json at all"));
        let record = annotator.annotate("Lehrer", Language::German).await.unwrap();
        assert_eq!(record.word_type, WordType::Noun);
        assert_eq!(record.gender, Some(Gender::Masculine));
    }

    #[tokio::test]
    async fn llm_transport_failure_propagates() {
        let annotator = with_llm(TimedOutLlm);
        let result = annotator.annotate("Haus", Language::German).await;
        assert!(matches!(result, Err(AnnotationError::Llm(LlmError::Timeout))));
    }

    #[tokio::test]
    async fn frequency_failure_is_absorbed() {
        let annotator = Annotator::new(
            LexicalAnnotator::offline(),
            FrequencyEstimator::with_source(Arc::new(DownFrequency)),
            MediaEstimator::offline(),
        );
        let record = annotator.annotate("Baum", Language::German).await.unwrap();
        assert_eq!(record.frequency, mock_frequency("Baum"));
    }

    #[tokio::test]
    async fn media_failure_propagates() {
        let annotator = Annotator::new(
            LexicalAnnotator::offline(),
            FrequencyEstimator::offline(),
            MediaEstimator::with_source(Arc::new(DownMedia)),
        );
        let result = annotator.annotate("Baum", Language::German).await;
        assert!(matches!(
            result,
            Err(AnnotationError::Media(ServiceError::Status(500)))
        ));
    }
}
