//! LLM access for word annotation.
//!
//! This module provides:
//! * [`LlmClient`] — async text-in / text-out trait implemented by backends.
//! * [`ApiClient`] — OpenAI-compatible REST API client.
//! * [`PromptBuilder`] — builds per-language annotation prompts.
//! * [`LlmError`] — error variants for LLM calls.
//!
//! Parsing the annotation out of the completion text is the job of the
//! language strategies in [`crate::annotate`].

pub mod client;
pub mod prompt;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::{ApiClient, CompletionParams, LlmClient, LlmError};
pub use prompt::PromptBuilder;
