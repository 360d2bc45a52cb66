//! Extraction error types.

use thiserror::Error;

use crate::types::DocumentKind;

/// Errors that can occur during document text extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No extractor is registered for the declared kind.
    #[error("Unsupported document kind: {0:?}")]
    UnsupportedKind(DocumentKind),

    /// The container format could not be opened at all. The boundary
    /// surfaces this as a client-facing bad-input error.
    #[error("Unreadable document: {0}")]
    Unreadable(String),

    /// IO error during extraction.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Task join error from spawn_blocking.
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
