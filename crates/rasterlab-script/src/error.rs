//! Error types for rasterlab-script
//!
//! Every variant is a per-instruction failure: the dispatcher reports it
//! to its output sink and resumes with the next token, so none of these
//! abort a running script.

use thiserror::Error;

/// Errors raised while executing script instructions
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Invalid store argument (empty identifier)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Referenced image id is not in the store
    #[error("image with id {0:?} doesn't exist")]
    NotFound(String),

    /// Malformed or missing instruction tokens
    #[error("{0}")]
    Parse(String),

    /// Core data model error (e.g. an invalid channel selector)
    #[error("{0}")]
    Core(#[from] rasterlab_core::Error),

    /// Loader/saver failure
    #[error("{0}")]
    Io(#[from] rasterlab_io::IoError),
}

/// Result type for script operations
pub type ScriptResult<T> = Result<T, ScriptError>;
