//! JPEG image format support
//!
//! Reads via the `jpeg-decoder` crate (grayscale and RGB streams) and
//! writes 8-bit RGB via `jpeg-encoder`. JPEG is lossy, so unlike the other
//! codecs a save/load cycle does not round-trip bit-exactly.

use crate::{IoError, IoResult};
use rasterlab_core::{Image, ImageMut, Pixel};
use std::io::{Read, Write};

/// Encoder quality for saved JPEGs.
const JPEG_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Image> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {e}")))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG stream carried no header".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let mut image = ImageMut::new(width, height);

    match info.pixel_format {
        jpeg_decoder::PixelFormat::L8 => {
            for y in 0..height {
                for x in 0..width {
                    let g = data[(y * width + x) as usize];
                    image.set_pixel_unchecked(x, y, rgb_pixel(g, g, g));
                }
            }
        }
        jpeg_decoder::PixelFormat::RGB24 => {
            for y in 0..height {
                for x in 0..width {
                    let idx = ((y * width + x) * 3) as usize;
                    image.set_pixel_unchecked(
                        x,
                        y,
                        rgb_pixel(data[idx], data[idx + 1], data[idx + 2]),
                    );
                }
            }
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {other:?}"
            )));
        }
    }

    Ok(image.into())
}

/// Write an image as an RGB JPEG.
pub fn write_jpeg<W: Write>(image: &Image, writer: W) -> IoResult<()> {
    let width = u16::try_from(image.width())
        .map_err(|_| IoError::EncodeError(format!("width {} exceeds JPEG limit", image.width())))?;
    let height = u16::try_from(image.height()).map_err(|_| {
        IoError::EncodeError(format!("height {} exceeds JPEG limit", image.height()))
    })?;

    let mut data = Vec::with_capacity(image.width() as usize * image.height() as usize * 3);
    for y in 0..image.height() {
        for x in 0..image.width() {
            let p = image.get_pixel_unchecked(x, y);
            data.extend_from_slice(&[p.red(), p.green(), p.blue()]);
        }
    }

    let encoder = jpeg_encoder::Encoder::new(writer, JPEG_QUALITY);
    encoder
        .encode(&data, width, height, jpeg_encoder::ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {e}")))?;
    Ok(())
}

#[inline]
fn rgb_pixel(r: u8, g: u8, b: u8) -> Pixel {
    Pixel::new(r as i32, g as i32, b as i32).expect("8-bit sample")
}
