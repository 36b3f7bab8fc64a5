//! PNG image format support

use crate::{IoError, IoResult};
use rasterlab_core::{Image, ImageMut, Pixel};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image, normalizing every color type to 8-bit RGB.
///
/// Palette and sub-byte grayscale images are expanded, 16-bit samples are
/// stripped to 8 bits, and alpha is dropped (the editor's transformations
/// do not consume it).
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Image> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {e}")))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {e}")))?;

    let width = output_info.width;
    let height = output_info.height;
    let data = &buf[..output_info.buffer_size()];
    let line_size = output_info.line_size;

    let samples = match output_info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpected PNG color type after expansion: {other:?}"
            )));
        }
    };

    let mut image = ImageMut::new(width, height);
    for y in 0..height {
        let row = &data[y as usize * line_size..];
        for x in 0..width {
            let idx = x as usize * samples;
            let pixel = match samples {
                1 | 2 => {
                    let g = row[idx];
                    rgb_pixel(g, g, g)
                }
                _ => rgb_pixel(row[idx], row[idx + 1], row[idx + 2]),
            };
            image.set_pixel_unchecked(x, y, pixel);
        }
    }

    Ok(image.into())
}

/// Write an image as 8-bit RGB PNG.
pub fn write_png<W: Write>(image: &Image, writer: W) -> IoResult<()> {
    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {e}")))?;

    let mut data = Vec::with_capacity(image.width() as usize * image.height() as usize * 3);
    for y in 0..image.height() {
        for x in 0..image.width() {
            let p = image.get_pixel_unchecked(x, y);
            data.extend_from_slice(&[p.red(), p.green(), p.blue()]);
        }
    }

    png_writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG encode error: {e}")))?;
    Ok(())
}

#[inline]
fn rgb_pixel(r: u8, g: u8, b: u8) -> Pixel {
    // u8 inputs are in range by construction
    Pixel::new(r as i32, g as i32, b as i32).expect("8-bit sample")
}
