//! In-memory record index shared by both store implementations.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::model::{AnnotatedWord, Language, NewAnnotatedWord, WordType};

use super::{MediaSummary, StoreError};

/// Records keyed by id, plus the next id to hand out.
///
/// This is also the on-disk shape of [`super::JsonFileStore`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WordTable {
    next_id: u64,
    words: BTreeMap<u64, AnnotatedWord>,
}

impl Default for WordTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            words: BTreeMap::new(),
        }
    }
}

impl WordTable {
    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }

    pub(crate) fn find(&self, word: &str, language: Language) -> Option<&AnnotatedWord> {
        self.words
            .values()
            .find(|w| w.word == word && w.language == language)
    }

    pub(crate) fn get(&self, id: u64) -> Option<&AnnotatedWord> {
        self.words.get(&id)
    }

    pub(crate) fn insert(&mut self, new: NewAnnotatedWord) -> Result<AnnotatedWord, StoreError> {
        if self.find(&new.word, new.language).is_some() {
            return Err(StoreError::Duplicate {
                word: new.word,
                language: new.language,
            });
        }

        // A hand-edited file may carry ids at or past `next_id`.
        let id = self
            .next_id
            .max(self.words.keys().next_back().map_or(1, |last| last + 1));
        self.next_id = id + 1;

        let record = new.with_id(id);
        self.words.insert(id, record.clone());
        Ok(record)
    }

    pub(crate) fn update(&mut self, mut word: AnnotatedWord) -> Result<AnnotatedWord, StoreError> {
        if !self.words.contains_key(&word.id) {
            return Err(StoreError::NotFound(word.id));
        }
        if let Some(other) = self.find(&word.word, word.language) {
            if other.id != word.id {
                return Err(StoreError::Duplicate {
                    word: word.word,
                    language: word.language,
                });
            }
        }

        word.updated_at = Utc::now();
        self.words.insert(word.id, word.clone());
        Ok(word)
    }

    pub(crate) fn remove(&mut self, id: u64) -> bool {
        self.words.remove(&id).is_some()
    }

    pub(crate) fn recent(&self, limit: usize) -> Vec<AnnotatedWord> {
        let mut words: Vec<&AnnotatedWord> = self.words.values().collect();
        words.sort_by(|a, b| newest_first(a, b));
        words.into_iter().take(limit).cloned().collect()
    }

    /// Records of `language` whose word or word type contains `query`
    /// (case-insensitive), newest first.  An empty query matches every record.
    fn filtered(&self, query: &str, language: Language) -> Vec<&AnnotatedWord> {
        let needle = query.trim().to_lowercase();
        let mut words: Vec<&AnnotatedWord> = self
            .words
            .values()
            .filter(|w| w.language == language)
            .filter(|w| {
                needle.is_empty()
                    || w.word.to_lowercase().contains(&needle)
                    || w.word_type.as_str().contains(&needle)
            })
            .collect();
        words.sort_by(|a, b| newest_first(a, b));
        words
    }

    pub(crate) fn find_filtered(
        &self,
        query: &str,
        language: Language,
        limit: usize,
        offset: usize,
    ) -> Vec<AnnotatedWord> {
        self.filtered(query, language)
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    pub(crate) fn count_filtered(&self, query: &str, language: Language) -> usize {
        self.filtered(query, language).len()
    }

    /// Records of one type and language, sorted by word.
    pub(crate) fn find_by_type(
        &self,
        word_type: WordType,
        language: Language,
    ) -> Vec<AnnotatedWord> {
        let mut words: Vec<AnnotatedWord> = self
            .words
            .values()
            .filter(|w| w.word_type == word_type && w.language == language)
            .cloned()
            .collect();
        words.sort_by(|a, b| a.word.cmp(&b.word).then(a.id.cmp(&b.id)));
        words
    }

    pub(crate) fn count_by_language(&self) -> Vec<(Language, usize)> {
        Language::ALL
            .into_iter()
            .map(|lang| {
                let n = self.words.values().filter(|w| w.language == lang).count();
                (lang, n)
            })
            .collect()
    }

    pub(crate) fn media_summary(&self) -> MediaSummary {
        self.words
            .values()
            .fold(MediaSummary::default(), |mut summary, w| {
                if w.has_audio {
                    summary.with_audio += 1;
                }
                if w.has_image {
                    summary.with_image += 1;
                }
                match (w.has_audio, w.has_image) {
                    (true, true) => summary.with_both += 1,
                    (false, false) => summary.with_none += 1,
                    _ => {}
                }
                summary
            })
    }
}

fn newest_first(a: &AnnotatedWord, b: &AnnotatedWord) -> std::cmp::Ordering {
    b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id))
}
