//! BMP image format support
//!
//! Reads and writes uncompressed Windows bitmaps with a BITMAPINFOHEADER.
//! The writer always emits bottom-up 24-bit BGR; the reader also accepts
//! 32-bit and top-down data, which covers what other editors commonly
//! produce for truecolor images.

use crate::{IoError, IoResult};
use rasterlab_core::{Image, ImageMut, Pixel};
use std::io::{Read, Write};

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

/// Read a BMP image.
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<Image> {
    let mut file_header = [0u8; BMP_FILE_HEADER_SIZE];
    reader.read_exact(&mut file_header)?;

    if &file_header[0..2] != b"BM" {
        return Err(IoError::InvalidData("not a BMP file".to_string()));
    }

    let mut info_header = [0u8; 40];
    reader.read_exact(&mut info_header)?;

    let header_size = u32::from_le_bytes(info_header[0..4].try_into().unwrap());
    if header_size < BMP_INFO_HEADER_SIZE {
        return Err(IoError::InvalidData(format!(
            "unsupported BMP header size: {header_size}"
        )));
    }

    let width = i32::from_le_bytes(info_header[4..8].try_into().unwrap());
    let height = i32::from_le_bytes(info_header[8..12].try_into().unwrap());
    let planes = u16::from_le_bytes(info_header[12..14].try_into().unwrap());
    if planes != 1 {
        return Err(IoError::InvalidData(format!(
            "unsupported number of planes: {planes}"
        )));
    }

    let bits_per_pixel = u16::from_le_bytes(info_header[14..16].try_into().unwrap());
    let compression = u32::from_le_bytes(info_header[16..20].try_into().unwrap());
    if compression != 0 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP compression: {compression}"
        )));
    }
    let bytes_per_pixel = match bits_per_pixel {
        24 => 3usize,
        32 => 4usize,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported BMP bit depth: {bits_per_pixel}"
            )));
        }
    };

    let top_down = height < 0;
    let width = width.unsigned_abs();
    let height = height.unsigned_abs();

    // Skip any header extension and optional color masks up to the pixel
    // array offset.
    let pixel_offset = u32::from_le_bytes(file_header[10..14].try_into().unwrap()) as usize;
    let consumed = BMP_FILE_HEADER_SIZE + 40;
    if pixel_offset > consumed {
        let mut skip = vec![0u8; pixel_offset - consumed];
        reader.read_exact(&mut skip)?;
    }

    let row_size = (width as usize * bytes_per_pixel).div_ceil(4) * 4;
    let mut row = vec![0u8; row_size];
    let mut image = ImageMut::new(width, height);

    for i in 0..height {
        reader.read_exact(&mut row)?;
        let y = if top_down { i } else { height - 1 - i };
        for x in 0..width {
            let idx = x as usize * bytes_per_pixel;
            // stored as BGR(A)
            let pixel = Pixel::new(row[idx + 2] as i32, row[idx + 1] as i32, row[idx] as i32)
                .expect("8-bit sample");
            image.set_pixel_unchecked(x, y, pixel);
        }
    }

    Ok(image.into())
}

/// Write an image as an uncompressed 24-bit BMP.
pub fn write_bmp<W: Write>(image: &Image, mut writer: W) -> IoResult<()> {
    let width = image.width();
    let height = image.height();
    let row_size = (width as usize * 3).div_ceil(4) * 4;
    let data_size = row_size * height as usize;
    let file_size = BMP_FILE_HEADER_SIZE + 40 + data_size;

    // File header
    writer.write_all(b"BM")?;
    writer.write_all(&(file_size as u32).to_le_bytes())?;
    writer.write_all(&[0u8; 4])?; // reserved
    writer.write_all(&((BMP_FILE_HEADER_SIZE + 40) as u32).to_le_bytes())?;

    // BITMAPINFOHEADER
    writer.write_all(&BMP_INFO_HEADER_SIZE.to_le_bytes())?;
    writer.write_all(&(width as i32).to_le_bytes())?;
    writer.write_all(&(height as i32).to_le_bytes())?; // bottom-up
    writer.write_all(&1u16.to_le_bytes())?; // planes
    writer.write_all(&24u16.to_le_bytes())?; // bits per pixel
    writer.write_all(&0u32.to_le_bytes())?; // compression
    writer.write_all(&(data_size as u32).to_le_bytes())?;
    writer.write_all(&2835i32.to_le_bytes())?; // 72 dpi
    writer.write_all(&2835i32.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?; // palette colors
    writer.write_all(&0u32.to_le_bytes())?; // important colors

    let mut row = vec![0u8; row_size];
    for i in 0..height {
        let y = height - 1 - i;
        for x in 0..width {
            let p = image.get_pixel_unchecked(x, y);
            let idx = x as usize * 3;
            row[idx] = p.blue();
            row[idx + 1] = p.green();
            row[idx + 2] = p.red();
        }
        writer.write_all(&row)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::ImageMut;
    use std::io::Cursor;

    #[test]
    fn test_round_trip() {
        // 3 wide forces one padding byte per row
        let mut image = ImageMut::new(3, 2);
        image.set_pixel(0, 0, 255, 0, 0).unwrap();
        image.set_pixel(1, 0, 0, 255, 0).unwrap();
        image.set_pixel(2, 0, 0, 0, 255).unwrap();
        image.set_pixel(0, 1, 10, 20, 30).unwrap();
        image.set_pixel(1, 1, 40, 50, 60).unwrap();
        image.set_pixel(2, 1, 70, 80, 90).unwrap();
        let image: Image = image.into();

        let mut buf = Vec::new();
        write_bmp(&image, &mut buf).unwrap();
        let reread = read_bmp(Cursor::new(buf)).unwrap();
        assert_eq!(reread, image);
    }

    #[test]
    fn test_read_rejects_bad_magic() {
        let result = read_bmp(Cursor::new(vec![0u8; 64]));
        assert!(matches!(result, Err(IoError::InvalidData(_))));
    }

    #[test]
    fn test_read_rejects_truncated() {
        let mut image = ImageMut::new(4, 4);
        image.set_pixel(0, 0, 1, 2, 3).unwrap();
        let image: Image = image.into();
        let mut buf = Vec::new();
        write_bmp(&image, &mut buf).unwrap();
        buf.truncate(buf.len() - 10);
        assert!(read_bmp(Cursor::new(buf)).is_err());
    }
}
