//! Image - a rectangular grid of pixels
//!
//! Two capability views split reading from writing:
//!
//! - [`Image`] is the read-only view: dimensions and per-pixel lookup.
//!   It uses `Arc` for cheap cloning, so transformation pipelines can pass
//!   images around without copying pixel data.
//! - [`ImageMut`] additionally allows per-pixel replacement. Convert with
//!   [`Image::try_into_mut`] or [`Image::to_mut`], and freeze back with
//!   `Into<Image>`.
//!
//! Transformations accept `&Image` and return a freshly allocated `Image`;
//! a source image is never mutated through the read-only view.
//!
//! Coordinates are (x = column, y = row), 0-indexed, stored row-major.

use crate::error::{Error, Result};
use crate::pixel::{Channel, Pixel};
use std::sync::Arc;

/// Internal image data shared by both views.
#[derive(Debug, PartialEq)]
struct ImageData {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl ImageData {
    fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        ImageData {
            width,
            height,
            pixels: vec![Pixel::default(); len],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

/// Read-only view of a pixel grid.
///
/// Equality compares dimensions and pixel data, which is what tests care
/// about; runtime logic never relies on image identity.
#[derive(Debug, Clone)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl Image {
    /// Create a width x height image with every pixel black (0, 0, 0).
    ///
    /// Zero width or height is a valid, empty image.
    pub fn new(width: u32, height: u32) -> Self {
        Image {
            inner: Arc::new(ImageData::new(width, height)),
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the grid.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Pixel> {
        let idx = self.inner.index(x, y)?;
        Ok(self.inner.pixels[idx])
    }

    /// Get the pixel at (x, y) without bounds checking.
    ///
    /// The caller must keep the coordinate in bounds; loops over
    /// `0..width` x `0..height` qualify. Debug builds assert.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Pixel {
        debug_assert!(x < self.inner.width && y < self.inner.height);
        self.inner.pixels[y as usize * self.inner.width as usize + x as usize]
    }

    /// Get one channel of the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the grid.
    pub fn get_channel(&self, x: u32, y: u32, channel: Channel) -> Result<u8> {
        Ok(self.get_pixel(x, y)?.channel(channel))
    }

    /// Convert to the mutable view without copying, if unshared.
    ///
    /// Fails (returning `self` unchanged) when other clones of this image
    /// are still alive.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(ImageMut { inner: data }),
            Err(arc) => Err(Image { inner: arc }),
        }
    }

    /// Create a mutable copy of this image.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: ImageData {
                width: self.inner.width,
                height: self.inner.height,
                pixels: self.inner.pixels.clone(),
            },
        }
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Image {}

/// Mutable view of a pixel grid.
///
/// Owned exclusively; freeze into an [`Image`] with `into()` once every
/// pixel has been written.
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

impl ImageMut {
    /// Create a width x height mutable image with every pixel black.
    pub fn new(width: u32, height: u32) -> Self {
        ImageMut {
            inner: ImageData::new(width, height),
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Pixel> {
        let idx = self.inner.index(x, y)?;
        Ok(self.inner.pixels[idx])
    }

    /// Replace the pixel at (x, y).
    ///
    /// Bounds are checked before channel ranges, so the first violated
    /// invariant is the one reported.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for an invalid coordinate, then
    /// [`Error::OutOfRange`] for an invalid channel value.
    pub fn set_pixel(&mut self, x: u32, y: u32, r: i32, g: i32, b: i32) -> Result<()> {
        let idx = self.inner.index(x, y)?;
        self.inner.pixels[idx] = Pixel::new(r, g, b)?;
        Ok(())
    }

    /// Replace the pixel at (x, y) without bounds checking.
    ///
    /// The caller must keep the coordinate in bounds; loops over
    /// `0..width` x `0..height` qualify. Debug builds assert.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, pixel: Pixel) {
        debug_assert!(x < self.inner.width && y < self.inner.height);
        self.inner.pixels[y as usize * self.inner.width as usize + x as usize] = pixel;
    }
}

impl From<ImageMut> for Image {
    fn from(image: ImageMut) -> Self {
        Image {
            inner: Arc::new(image.inner),
        }
    }
}
