//! rasterlab-io - Image loaders and savers
//!
//! Reads and writes the formats the command language accepts:
//!
//! - Plain-text PPM (P3)
//! - PNG (via the `png` crate)
//! - JPEG (via `jpeg-decoder` / `jpeg-encoder`)
//! - Uncompressed 24-bit BMP
//!
//! [`read_image`] and [`write_image`] classify the format by file
//! extension and dispatch to the matching codec.

pub mod bmp;
mod error;
mod format;
pub mod jpeg;
pub mod png;
pub mod ppm;

pub use error::{IoError, IoResult};
pub use format::ImageFormat;

use rasterlab_core::Image;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read an image from a file path, classifying the format by extension.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;
    let reader = BufReader::new(File::open(path)?);
    match format {
        ImageFormat::Ppm => ppm::read_ppm(reader),
        ImageFormat::Png => png::read_png(reader),
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        ImageFormat::Bmp => bmp::read_bmp(reader),
    }
}

/// Write an image to a file path, classifying the format by extension.
pub fn write_image<P: AsRef<Path>>(image: &Image, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;
    let writer = BufWriter::new(File::create(path)?);
    match format {
        ImageFormat::Ppm => ppm::write_ppm(image, writer),
        ImageFormat::Png => png::write_png(image, writer),
        ImageFormat::Jpeg => jpeg::write_jpeg(image, writer),
        ImageFormat::Bmp => bmp::write_bmp(image, writer),
    }
}
