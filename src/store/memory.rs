//! Process-local [`WordStore`].

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::model::{AnnotatedWord, Language, NewAnnotatedWord, WordType};

use super::table::WordTable;
use super::{MediaSummary, StoreError, WordStore};

/// Records held in memory only; lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: RwLock<WordTable>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl WordStore for MemoryStore {
    async fn find_by_word_and_language(
        &self,
        word: &str,
        language: Language,
    ) -> Result<Option<AnnotatedWord>, StoreError> {
        Ok(self.table.read().await.find(word, language).cloned())
    }

    async fn insert(&self, word: NewAnnotatedWord) -> Result<AnnotatedWord, StoreError> {
        self.table.write().await.insert(word)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<AnnotatedWord>, StoreError> {
        Ok(self.table.read().await.get(id).cloned())
    }

    async fn update(&self, word: AnnotatedWord) -> Result<AnnotatedWord, StoreError> {
        self.table.write().await.update(word)
    }

    async fn delete(&self, id: u64) -> Result<bool, StoreError> {
        Ok(self.table.write().await.remove(id))
    }

    async fn recent(&self, limit: usize) -> Result<Vec<AnnotatedWord>, StoreError> {
        Ok(self.table.read().await.recent(limit))
    }

    async fn find_filtered(
        &self,
        query: &str,
        language: Language,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<AnnotatedWord>, StoreError> {
        Ok(self
            .table
            .read()
            .await
            .find_filtered(query, language, limit, offset))
    }

    async fn count_filtered(&self, query: &str, language: Language) -> Result<usize, StoreError> {
        Ok(self.table.read().await.count_filtered(query, language))
    }

    async fn find_by_type(
        &self,
        word_type: WordType,
        language: Language,
    ) -> Result<Vec<AnnotatedWord>, StoreError> {
        Ok(self.table.read().await.find_by_type(word_type, language))
    }

    async fn count_by_language(&self) -> Result<Vec<(Language, usize)>, StoreError> {
        Ok(self.table.read().await.count_by_language())
    }

    async fn media_summary(&self) -> Result<MediaSummary, StoreError> {
        Ok(self.table.read().await.media_summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::table::tests::sample;

    #[tokio::test]
    async fn insert_then_find() {
        let store = MemoryStore::new();
        assert!(store.is_empty().await);

        let stored = store.insert(sample("Katze", Language::German)).await.unwrap();
        assert_eq!(stored.id, 1);

        let found = store
            .find_by_word_and_language("Katze", Language::German)
            .await
            .unwrap();
        assert_eq!(found, Some(stored.clone()));
        assert_eq!(store.find_by_id(1).await.unwrap(), Some(stored));
        assert_eq!(
            store
                .find_by_word_and_language("Katze", Language::English)
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let store = MemoryStore::new();
        store.insert(sample("Hund", Language::German)).await.unwrap();
        let err = store
            .insert(sample("Hund", Language::German))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn update_bumps_timestamp() {
        let store = MemoryStore::new();
        let mut stored = store.insert(sample("Buch", Language::German)).await.unwrap();
        let created = stored.updated_at;

        stored.proved_by_therapist = true;
        let updated = store.update(stored).await.unwrap();
        assert!(updated.proved_by_therapist);
        assert!(updated.updated_at >= created);
        assert_eq!(updated.created_at, created);
    }

    #[tokio::test]
    async fn update_of_missing_record_fails() {
        let store = MemoryStore::new();
        let ghost = sample("Mond", Language::German).with_id(42);
        assert!(matches!(
            store.update(ghost).await,
            Err(StoreError::NotFound(42))
        ));
    }

    #[tokio::test]
    async fn delete_reports_presence() {
        let store = MemoryStore::new();
        let stored = store.insert(sample("Baum", Language::German)).await.unwrap();
        assert!(store.delete(stored.id).await.unwrap());
        assert!(!store.delete(stored.id).await.unwrap());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn counts_per_language() {
        let store = MemoryStore::new();
        store.insert(sample("Sonne", Language::German)).await.unwrap();
        store.insert(sample("Mond", Language::German)).await.unwrap();
        store.insert(sample("sun", Language::English)).await.unwrap();

        assert_eq!(
            store.count_by_language().await.unwrap(),
            vec![(Language::German, 2), (Language::English, 1)]
        );
    }

    #[tokio::test]
    async fn search_and_type_lookup() {
        let store = MemoryStore::new();
        for (word, word_type) in [
            ("Blume", WordType::Noun),
            ("blühen", WordType::Verb),
            ("Blumentopf", WordType::Noun),
        ] {
            let mut w = sample(word, Language::German);
            w.word_type = word_type;
            store.insert(w).await.unwrap();
        }

        assert_eq!(store.count_filtered("blu", Language::German).await.unwrap(), 2);
        assert_eq!(store.count_filtered("blu", Language::English).await.unwrap(), 0);
        let page = store
            .find_filtered("blume", Language::German, 1, 0)
            .await
            .unwrap();
        assert_eq!(page.len(), 1);

        let nouns: Vec<String> = store
            .find_by_type(WordType::Noun, Language::German)
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.word)
            .collect();
        assert_eq!(nouns, vec!["Blume", "Blumentopf"]);
    }
}
