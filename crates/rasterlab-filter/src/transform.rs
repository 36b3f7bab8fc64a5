//! Transformation catalog
//!
//! [`Transformation`] packages each image operation together with its
//! minimal state (channel selector, brighten delta); the kernel-backed
//! variants carry none because their weight matrices are fixed. The command
//! dispatcher builds these from parsed tokens and applies them against the
//! image store.

use crate::{blur, brighten, sharpen};
use crate::greyscale::{
    greyscale_channel, greyscale_intensity, greyscale_luma, greyscale_value,
};
use rasterlab_core::{Channel, Image};

/// An image transformation and its parameters.
///
/// Every variant is pure: [`Transformation::apply`] reads the source
/// through the read-only view and returns a newly allocated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transformation {
    /// 3x3 Gaussian blur
    Blur,
    /// 5x5 sharpen
    Sharpen,
    /// Greyscale from one source channel
    GreyscaleChannel(Channel),
    /// Greyscale from max(r, g, b)
    GreyscaleValue,
    /// Greyscale from the truncated channel average
    GreyscaleIntensity,
    /// Greyscale from the weighted luma sum
    GreyscaleLuma,
    /// Add a signed delta to every channel, clamped
    Brighten(i32),
}

impl Transformation {
    /// Apply this transformation to `source`, producing a new image.
    pub fn apply(&self, source: &Image) -> Image {
        match *self {
            Transformation::Blur => blur(source),
            Transformation::Sharpen => sharpen(source),
            Transformation::GreyscaleChannel(channel) => greyscale_channel(source, channel),
            Transformation::GreyscaleValue => greyscale_value(source),
            Transformation::GreyscaleIntensity => greyscale_intensity(source),
            Transformation::GreyscaleLuma => greyscale_luma(source),
            Transformation::Brighten(delta) => brighten(source, delta),
        }
    }
}
