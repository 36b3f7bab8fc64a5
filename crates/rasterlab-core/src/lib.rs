//! rasterlab-core - Pixel and image data model
//!
//! This crate provides the data structures shared by the rasterlab image
//! editor:
//!
//! - [`Pixel`] - one RGB(+alpha) sample with validated channel range
//! - [`Channel`] - red/green/blue selector
//! - [`Image`] / [`ImageMut`] - a pixel grid (read-only / mutable views)
//! - [`Error`] - validation errors for all of the above

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::{Image, ImageMut};
pub use pixel::{Channel, Pixel};
