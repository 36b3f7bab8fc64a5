//! Error types for rasterlab-filter

use thiserror::Error;

/// Errors that can occur while building or applying filters
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core data model error
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::Error),

    /// Invalid kernel geometry
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
