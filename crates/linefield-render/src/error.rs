//! Rendering error types.

use thiserror::Error;

/// Errors that can occur while writing or patching a document.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The document lacks a tag the patcher anchors on.
    #[error("document has no {0} tag")]
    MissingTag(&'static str),

    /// Failed to read or write the document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize figure data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
