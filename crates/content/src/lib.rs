#![forbid(unsafe_code)]

pub mod document;
pub mod source;

pub use document::{ContentDocument, ContentValidationError, LevelRecord, QuestionRecord};
pub use source::{
    ContentError, ContentSource, FileContentSource, HttpContentSource, StaticContentSource,
    load_content, source_for,
};
