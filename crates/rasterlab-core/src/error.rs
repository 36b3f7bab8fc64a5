//! Error types for rasterlab-core
//!
//! Provides a unified error type for the pixel/image data model.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Core data model error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Channel value outside [0, 255]
    #[error("channel value out of range: {value}")]
    OutOfRange { value: i32 },

    /// Pixel coordinate outside the image
    #[error("pixel coordinate out of bounds: ({x}, {y}) in {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Unrecognized channel selector
    #[error("invalid channel: {0:?} (expected red, green, or blue)")]
    InvalidChannel(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
