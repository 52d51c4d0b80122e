//! Batch request validation.

use thiserror::Error;

use crate::model::WordRequest;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no words to annotate")]
    EmptyBatch,

    #[error("too many words: {count} (max {max})")]
    TooManyWords { count: usize, max: usize },

    /// The word at `index` is empty after trimming.
    #[error("word #{} is empty", .index + 1)]
    EmptyWord { index: usize },
}

/// Check a batch and return it with every word trimmed.
pub fn validate(
    requests: Vec<WordRequest>,
    max_words: usize,
) -> Result<Vec<WordRequest>, ValidationError> {
    if requests.is_empty() {
        return Err(ValidationError::EmptyBatch);
    }
    if requests.len() > max_words {
        return Err(ValidationError::TooManyWords {
            count: requests.len(),
            max: max_words,
        });
    }

    requests
        .into_iter()
        .enumerate()
        .map(|(index, mut req)| {
            let trimmed = req.word.trim();
            if trimmed.is_empty() {
                return Err(ValidationError::EmptyWord { index });
            }
            req.word = trimmed.to_string();
            req.language = req
                .language
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty());
            Ok(req)
        })
        .collect()
}
