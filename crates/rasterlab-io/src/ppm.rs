//! Plain-text PPM (P3) format support
//!
//! The reader tolerates arbitrary whitespace between samples and skips
//! `#` comments. The writer emits the fixed layout consumed by the rest of
//! the toolchain: `P3`, a width/height line, the 255 maxval line, then one
//! decimal value per line for each of R, G, B in row-major order.

use crate::{IoError, IoResult};
use rasterlab_core::{Image, ImageMut};
use std::io::{BufRead, Write};

/// Read a plain-text PPM (P3) image from a reader.
pub fn read_ppm<R: BufRead>(reader: R) -> IoResult<Image> {
    let mut tokens = Tokens::new(reader);

    let magic = tokens.next("magic number")?;
    if magic != "P3" {
        return Err(IoError::InvalidData(format!(
            "plain PPM must begin with P3, got {magic:?}"
        )));
    }

    let width: u32 = parse_header_value(&tokens.next("width")?, "width")?;
    let height: u32 = parse_header_value(&tokens.next("height")?, "height")?;
    let maxval: u32 = parse_header_value(&tokens.next("maxval")?, "maxval")?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::InvalidData(format!(
            "unsupported maxval {maxval} (expected 1..=255)"
        )));
    }

    let mut image = ImageMut::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let r = parse_sample(&tokens.next("red sample")?)?;
            let g = parse_sample(&tokens.next("green sample")?)?;
            let b = parse_sample(&tokens.next("blue sample")?)?;
            image.set_pixel(x, y, r, g, b)?;
        }
    }

    Ok(image.into())
}

/// Write an image as plain-text PPM (P3).
pub fn write_ppm<W: Write>(image: &Image, mut writer: W) -> IoResult<()> {
    write!(writer, "P3\n{} {}\n255\n", image.width(), image.height())?;
    for y in 0..image.height() {
        for x in 0..image.width() {
            let p = image.get_pixel_unchecked(x, y);
            write!(writer, "{}\n{}\n{}\n", p.red(), p.green(), p.blue())?;
        }
    }
    Ok(())
}

fn parse_header_value(token: &str, what: &str) -> IoResult<u32> {
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("bad {what}: {token:?}")))
}

fn parse_sample(token: &str) -> IoResult<i32> {
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("bad sample: {token:?}")))
}

/// Whitespace-delimited token reader that drops `#` comments.
struct Tokens<R> {
    reader: R,
    line: Vec<String>,
    pos: usize,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Tokens {
            reader,
            line: Vec::new(),
            pos: 0,
        }
    }

    fn next(&mut self, what: &str) -> IoResult<String> {
        loop {
            if self.pos < self.line.len() {
                let token = self.line[self.pos].clone();
                self.pos += 1;
                return Ok(token);
            }
            let mut buf = String::new();
            if self.reader.read_line(&mut buf)? == 0 {
                return Err(IoError::InvalidData(format!(
                    "unexpected end of file reading {what}"
                )));
            }
            let content = buf.split('#').next().unwrap_or("");
            self.line = content.split_whitespace().map(str::to_string).collect();
            self.pos = 0;
        }
    }
}
