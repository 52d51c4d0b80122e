//! [`WordStore`] persisted to a single pretty-printed JSON file.
//!
//! The whole table is kept in memory and rewritten after every mutation.
//! Writes go to a temporary file in the same directory which then replaces
//! the store file, so a crash never leaves a half-written store behind.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::sync::RwLock;

use crate::model::{AnnotatedWord, Language, NewAnnotatedWord, WordType};

use super::table::WordTable;
use super::{MediaSummary, StoreError, WordStore};

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    table: RwLock<WordTable>,
}

impl JsonFileStore {
    /// Open the store at `path`.  A missing file yields an empty store; the
    /// file is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let table = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let table: WordTable = serde_json::from_str(&content)?;
            log::debug!("loaded {} word(s) from {}", table.len(), path.display());
            table
        } else {
            log::debug!("no store at {}, starting empty", path.display());
            WordTable::default()
        };

        Ok(Self {
            path,
            table: RwLock::new(table),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `table` to disk.  The file I/O runs on the blocking pool.
    async fn persist(&self, table: &WordTable) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(table)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomically(&path, &bytes))
            .await
            .map_err(io::Error::other)??;

        log::debug!("saved {} word(s) to {}", table.len(), self.path.display());
        Ok(())
    }
}

/// Replace `path` with `bytes` via a temporary file in the same directory.
fn write_atomically(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let temp_file = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        writer.write_all(bytes)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[async_trait]
impl WordStore for JsonFileStore {
    async fn find_by_word_and_language(
        &self,
        word: &str,
        language: Language,
    ) -> Result<Option<AnnotatedWord>, StoreError> {
        Ok(self.table.read().await.find(word, language).cloned())
    }

    async fn insert(&self, word: NewAnnotatedWord) -> Result<AnnotatedWord, StoreError> {
        let mut table = self.table.write().await;
        let mut next = table.clone();
        let record = next.insert(word)?;
        self.persist(&next).await?;
        *table = next;
        Ok(record)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<AnnotatedWord>, StoreError> {
        Ok(self.table.read().await.get(id).cloned())
    }

    async fn update(&self, word: AnnotatedWord) -> Result<AnnotatedWord, StoreError> {
        let mut table = self.table.write().await;
        let mut next = table.clone();
        let record = next.update(word)?;
        self.persist(&next).await?;
        *table = next;
        Ok(record)
    }

    async fn delete(&self, id: u64) -> Result<bool, StoreError> {
        let mut table = self.table.write().await;
        if table.get(id).is_none() {
            return Ok(false);
        }
        let mut next = table.clone();
        next.remove(id);
        self.persist(&next).await?;
        *table = next;
        Ok(true)
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
