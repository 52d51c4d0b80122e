//! Batch annotation for the vocabulary store.
//!
//! # Architecture
//!
//! ```text
//! Vec<WordRequest>
//!        │
//!        ▼
//! BatchRunner::run()
//!        │
//!        ├─ validate (non-empty, ≤ max_words, no blank words)
//!        │
//!        └─ per word, sequentially
//!              ├─ WordStore::find_by_word_and_language  → hit: reuse
//!              └─ Annotator::annotate → WordStore::insert
//!                     └─ tokio::join!(lexical, frequency, safe letters, media)
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use word_annotator::annotate::Annotator;
//! use word_annotator::config::AppConfig;
//! use word_annotator::model::WordRequest;
//! use word_annotator::pipeline::BatchRunner;
//! use word_annotator::store::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let runner = BatchRunner::new(
//!         Arc::new(Annotator::from_config(&config)),
//!         Arc::new(MemoryStore::new()),
//!         config.batch.clone(),
//!     );
//!
//!     let report = runner.run(vec![WordRequest::new("Katze")]).await.unwrap();
//!     println!("{} ms", report.processing_time_ms);
//! }
//! ```

pub mod runner;
pub mod seed;
pub mod validation;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use runner::{BatchError, BatchReport, BatchRunner};
pub use seed::{seed_requests, SEED_WORDS};
pub use validation::{validate, ValidationError};
