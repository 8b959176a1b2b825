//! Error types for linefield.

use thiserror::Error;

/// The main error type for linefield operations.
#[derive(Error, Debug)]
pub enum LinefieldError {
    /// A structure with the given name already exists in the scene.
    #[error("structure '{0}' already exists")]
    StructureExists(String),

    /// A structure with the given name was not found.
    #[error("structure '{0}' not found")]
    StructureNotFound(String),

    /// An animation group with the given name already exists.
    #[error("group '{0}' already exists")]
    GroupExists(String),

    /// A configuration value is out of its valid range.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Rendering or post-processing error.
    #[error("render error: {0}")]
    RenderError(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for linefield operations.
pub type Result<T> = std::result::Result<T, LinefieldError>;
