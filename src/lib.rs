//! Word annotation for a speech-therapy vocabulary tool.
//!
//! Each word is annotated with its grammatical type, noun gender (German),
//! syllables, safe letters for completion exercises, a frequency score and
//! media availability.  External services are optional; every annotation
//! has a deterministic offline fallback.

pub mod annotate;
pub mod config;
pub mod error;
pub mod llm;
pub mod model;
pub mod pipeline;
pub mod store;

pub use error::AnnotationError;
