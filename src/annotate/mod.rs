//! Word annotation pipeline.
//!
//! This module provides:
//! * [`Annotator`] — facade that runs the four sub-annotations concurrently
//!   and merges them into one record.
//! * [`AnnotationStrategy`] — per-language prompt, response parsing and
//!   fallback heuristics.
//! * [`LexicalAnnotator`] — LLM-backed word type / gender / syllables.
//! * [`FrequencyEstimator`] / [`MediaEstimator`] — external lookups with
//!   deterministic mocks.
//! * [`safe_letters`] / [`split_syllables`] — pure word algorithms.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use word_annotator::annotate::Annotator;
//! use word_annotator::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     let annotator = Annotator::from_config(&AppConfig::default());
//!     let record = annotator.annotate_code("Katze", "de").await.unwrap();
//!     println!("{} {:?}", record.word_type, record.syllables);
//! }
//! ```

pub mod english;
pub mod facade;
pub mod frequency;
pub mod german;
pub mod http;
pub mod lexical;
pub mod media;
pub mod response;
pub mod safe_letters;
pub mod strategy;
pub mod syllables;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use facade::Annotator;
pub use frequency::{mock_frequency, FrequencyEstimator, FrequencySource, HttpFrequencySource};
pub use http::ServiceError;
pub use lexical::LexicalAnnotator;
pub use media::{mock_availability, HttpMediaSource, MediaEstimator, MediaSource};
pub use response::ParseFailure;
pub use safe_letters::safe_letters;
pub use strategy::AnnotationStrategy;
pub use syllables::split_syllables;

/// Sum of the word's code points, the checksum behind both mocks.
pub(crate) fn char_code_sum(s: &str) -> u64 {
    s.chars().map(|c| c as u64).sum()
}
