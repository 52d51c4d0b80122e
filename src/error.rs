//! Errors surfaced by the annotation facade.

use thiserror::Error;

use crate::annotate::ServiceError;
use crate::llm::LlmError;

/// Unrecovered failure while annotating a single word.
///
/// Parse failures and frequency-service failures never appear here; both are
/// absorbed by their fallbacks.
#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("LLM annotation failed: {0}")]
    Llm(#[from] LlmError),

    #[error("media availability check failed: {0}")]
    Media(#[from] ServiceError),

    #[error("annotation timed out after {secs}s")]
    Timeout { secs: u64 },
}
