//! LLM-backed lexical annotation (word type, gender, syllables).
//!
//! Without a configured LLM every word goes straight to the language
//! fallback.  With one, a transport-level failure is a hard error for the
//! word; a completion that cannot be parsed is not, and falls back.

use std::sync::Arc;

use crate::config::LlmConfig;
use crate::llm::{ApiClient, CompletionParams, LlmClient, LlmError};
use crate::model::LexicalAnnotation;

use super::strategy::AnnotationStrategy;

pub struct LexicalAnnotator {
    client: Option<Arc<dyn LlmClient>>,
    params: CompletionParams,
}

impl LexicalAnnotator {
    /// Annotator that never calls an LLM.
    pub fn offline() -> Self {
        Self {
            client: None,
            params: CompletionParams::default(),
        }
    }

    pub fn new(client: Arc<dyn LlmClient>, params: CompletionParams) -> Self {
        Self {
            client: Some(client),
            params,
        }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        if config.is_available() {
            log::info!("LLM annotation enabled (model: {})", config.model);
            Self::new(Arc::new(ApiClient::from_config(config)), config.into())
        } else {
            if config.enabled {
                log::warn!("LLM API key not configured, using fallback annotations");
            } else {
                log::info!("LLM annotation disabled, using fallback annotations");
            }
            Self::offline()
        }
    }

    pub fn is_online(&self) -> bool {
        self.client.is_some()
    }

    /// Annotate `word` with the given language strategy.
    pub async fn annotate(
        &self,
        word: &str,
        strategy: AnnotationStrategy,
    ) -> Result<LexicalAnnotation, LlmError> {
        let Some(client) = &self.client else {
            return Ok(strategy.fallback(word));
        };

        let prompt = strategy.create_prompt(word);
        log::debug!(
            "requesting lexical annotation for {word:?} ({})",
            strategy.language().name()
        );

        let raw = client.send(&prompt, &self.params).await.map_err(|e| {
            log::error!("LLM annotation failed for {word:?}: {e}");
            e
        })?;

        Ok(strategy.parse_response(&raw, word))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
