//! Domain types shared by the annotation pipeline, the store and the CLI.

pub mod language;
pub mod word;

pub use language::Language;
pub use word::{
    AnnotatedWord, Gender, LexicalAnnotation, MediaAvailability, NewAnnotatedWord, UnknownValue,
    WordRequest, WordType,
};
