//! Errors raised by the registry and the document model.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown block variant: {0}")]
    UnknownVariant(String),

    #[error("Props of `{variant}` block do not match its schema at `{path}`: {detail}")]
    SchemaMismatch {
        variant: String,
        path: String,
        detail: String,
    },

    #[error("Block not found: {0}")]
    BlockNotFound(String),

    #[error("Chapter not found: {0}")]
    ChapterNotFound(String),

    #[error("Duplicate block id: {0}")]
    DuplicateBlockId(String),

    #[error("A document must keep at least one chapter")]
    LastChapter,
}
