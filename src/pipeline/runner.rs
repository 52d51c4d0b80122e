//! Batch runner: lookup-or-annotate for a list of word requests.
//!
//! # Flow
//!
//! ```text
//! validate(requests)
//!   └─▶ for each request, in order
//!         resolve language (request or configured default)
//!         ├─ stored?  → reuse the record
//!         └─ missing → Annotator::annotate (bounded by timeout) → store.insert
//! ```
//!
//! The first unrecovered failure aborts the batch; records inserted for
//! earlier words stay in the store.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use thiserror::Error;

use crate::annotate::Annotator;
use crate::config::BatchConfig;
use crate::error::AnnotationError;
use crate::model::{AnnotatedWord, Language, WordRequest};
use crate::store::{StoreError, WordStore};

use super::seed::seed_requests;
use super::validation::{validate, ValidationError};

// ---------------------------------------------------------------------------
// BatchError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("failed to annotate {word:?}: {source}")]
    Annotation {
        word: String,
        #[source]
        source: AnnotationError,
    },

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

// ---------------------------------------------------------------------------
// BatchReport
// ---------------------------------------------------------------------------

/// Result of a successful batch, in request order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub processing_time_ms: u64,
    pub words: Vec<AnnotatedWord>,
}

// ---------------------------------------------------------------------------
// BatchRunner
// ---------------------------------------------------------------------------

pub struct BatchRunner {
    annotator: Arc<Annotator>,
    store: Arc<dyn WordStore>,
    config: BatchConfig,
}

impl BatchRunner {
    pub fn new(annotator: Arc<Annotator>, store: Arc<dyn WordStore>, config: BatchConfig) -> Self {
        Self {
            annotator,
            store,
            config,
        }
    }

    pub fn store(&self) -> &Arc<dyn WordStore> {
        &self.store
    }

    /// Annotate every request not already stored and return all records.
    pub async fn run(&self, requests: Vec<WordRequest>) -> Result<BatchReport, BatchError> {
        let started = Instant::now();
        let requests = validate(requests, self.config.max_words)?;
        log::info!("processing batch of {} word(s)", requests.len());

        let mut words = Vec::with_capacity(requests.len());
        for request in requests {
            let language = self.resolve_language(request.language.as_deref());
            words.push(self.lookup_or_annotate(&request.word, language).await?);
        }

        let processing_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        log::info!(
            "batch of {} word(s) finished in {processing_time_ms} ms",
            words.len()
        );

        Ok(BatchReport {
            processing_time_ms,
            words,
        })
    }

    /// Annotate the starter vocabulary.
    pub async fn populate(&self) -> Result<BatchReport, BatchError> {
        log::info!("populating store with starter vocabulary");
        self.run(seed_requests()).await
    }

    fn resolve_language(&self, requested: Option<&str>) -> Language {
        Language::from_code(requested.unwrap_or(&self.config.default_language))
    }

    async fn lookup_or_annotate(
        &self,
        word: &str,
        language: Language,
    ) -> Result<AnnotatedWord, BatchError> {
        if let Some(existing) = self.store.find_by_word_and_language(word, language).await? {
            log::debug!("{word:?} ({language}) already stored as #{}", existing.id);
            return Ok(existing);
        }

        let secs = self.config.annotation_timeout_secs;
        let annotated = tokio::time::timeout(
            Duration::from_secs(secs),
            self.annotator.annotate(word, language),
        )
        .await
        .unwrap_or_else(|_| Err(AnnotationError::Timeout { secs }))
        .map_err(|source| {
            log::error!("annotation of {word:?} failed: {source}");
            BatchError::Annotation {
                word: word.to_string(),
                source,
            }
        })?;

        let stored = self.store.insert(annotated).await?;
        log::debug!("stored {word:?} ({language}) as #{}", stored.id);
        Ok(stored)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
