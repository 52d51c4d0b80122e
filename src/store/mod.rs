//! Persistence of annotated word records.
//!
//! This module provides:
//! * [`WordStore`] — async trait the batch runner talks to.
//! * [`MemoryStore`] — in-process store, used by tests and one-shot runs.
//! * [`JsonFileStore`] — the same index persisted to a JSON file.
//! * [`StoreError`] / [`MediaSummary`].

pub mod json_file;
pub mod memory;
mod table;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{AnnotatedWord, Language, NewAnnotatedWord, WordType};

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

// ---------------------------------------------------------------------------
// StoreError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A record for this (word, language) pair already exists.
    #[error("{word:?} ({language}) is already stored")]
    Duplicate { word: String, language: Language },

    #[error("no record with id {0}")]
    NotFound(u64),
}

// ---------------------------------------------------------------------------
// MediaSummary
// ---------------------------------------------------------------------------

/// Counts of stored records by media availability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSummary {
    pub with_audio: usize,
    pub with_image: usize,
    pub with_both: usize,
    pub with_none: usize,
}

// ---------------------------------------------------------------------------
// WordStore
// ---------------------------------------------------------------------------

/// Record store for annotated words.
///
/// A (word, language) pair is unique.  Identifiers are assigned by the store
/// and never reused.
#[async_trait]
pub trait WordStore: Send + Sync {
    async fn find_by_word_and_language(
        &self,
        word: &str,
        language: Language,
    ) -> Result<Option<AnnotatedWord>, StoreError>;

    /// Store a new record and return it with its assigned id.
    async fn insert(&self, word: NewAnnotatedWord) -> Result<AnnotatedWord, StoreError>;

    async fn find_by_id(&self, id: u64) -> Result<Option<AnnotatedWord>, StoreError>;

    /// Replace an existing record; `updated_at` is set to now.
    async fn update(&self, word: AnnotatedWord) -> Result<AnnotatedWord, StoreError>;

    /// Remove a record; `false` when no record had that id.
    async fn delete(&self, id: u64) -> Result<bool, StoreError>;

    /// The `limit` most recently created records, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<AnnotatedWord>, StoreError>;

    /// Records of `language` whose word or word type contains `query`,
    /// ignoring case, newest first, paged by `limit` / `offset`.
    async fn find_filtered(
        &self,
        query: &str,
        language: Language,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<AnnotatedWord>, StoreError>;

    /// Number of records [`WordStore::find_filtered`] would page through.
    async fn count_filtered(&self, query: &str, language: Language) -> Result<usize, StoreError>;

    /// Records of one word type and language, sorted by word.
    async fn find_by_type(
        &self,
        word_type: WordType,
        language: Language,
    ) -> Result<Vec<AnnotatedWord>, StoreError>;

    /// Record count per supported language, in [`Language::ALL`] order.
    async fn count_by_language(&self) -> Result<Vec<(Language, usize)>, StoreError>;

    async fn media_summary(&self) -> Result<MediaSummary, StoreError>;
}
