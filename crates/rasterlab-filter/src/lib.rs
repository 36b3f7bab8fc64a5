//! rasterlab-filter - Convolution engine and transformation catalog
//!
//! This crate provides the image operations of the rasterlab editor:
//!
//! - Convolution with odd-sized square kernels ([`Kernel`], [`convolve`])
//! - The fixed filter catalog (blur, sharpen)
//! - Per-pixel recolorings (greyscale variants, brighten/darken)
//! - [`Transformation`], the tagged catalog used by the command dispatcher
//!
//! All operations take a read-only image and return a fresh one; sources
//! are never mutated.

mod convolve;
mod enhance;
mod error;
pub mod greyscale;
pub mod kernel;
mod transform;

pub use convolve::{blur, convolve, sharpen};
pub use enhance::brighten;
pub use error::{FilterError, FilterResult};
pub use greyscale::{greyscale_channel, greyscale_intensity, greyscale_luma, greyscale_value};
pub use kernel::Kernel;
pub use transform::Transformation;
