use std::io;

use thiserror::Error;

use crate::types::FileId;

/// Error type for metadata extraction, listing, and correlation failures.
///
/// Normalization and sanitization functions never produce these — they are
/// total and degrade instead. Only the schema-checked and correlated
/// operations fail, and they fail fast.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("required column '{column}' missing in row {row}")]
    MissingColumn { column: &'static str, row: usize },
    #[error("file id '{id}' not present in metadata index")]
    UnmatchedFileId { id: FileId },
    #[error(transparent)]
    Io(#[from] io::Error),
}
