//! Image format classification
//!
//! Formats are classified by file extension, which is what the command
//! language exposes: `load photo.png id` picks the PNG codec because of the
//! path, not the bytes.

use crate::{IoError, IoResult};
use std::path::Path;

/// Supported image file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Plain-text portable pixmap (P3)
    Ppm,
    /// PNG
    Png,
    /// JFIF JPEG
    Jpeg,
    /// Windows bitmap
    Bmp,
}

impl ImageFormat {
    /// Classify a path by its extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnsupportedFormat`] if the extension is missing
    /// or unrecognized.
    pub fn from_path<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("ppm") => Ok(ImageFormat::Ppm),
            Some("png") => Ok(ImageFormat::Png),
            Some("jpg") | Some("jpeg") => Ok(ImageFormat::Jpeg),
            Some("bmp") => Ok(ImageFormat::Bmp),
            _ => Err(IoError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// The canonical file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Ppm => "ppm",
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Bmp => "bmp",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_known_extensions() {
        assert_eq!(ImageFormat::from_path("a.ppm").unwrap(), ImageFormat::Ppm);
        assert_eq!(ImageFormat::from_path("a.png").unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path("a.jpg").unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_path("a.jpeg").unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_path("a.bmp").unwrap(), ImageFormat::Bmp);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(ImageFormat::from_path("A.PPM").unwrap(), ImageFormat::Ppm);
        assert_eq!(
            ImageFormat::from_path("photo.JPeG").unwrap(),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_nested_paths() {
        assert_eq!(
            ImageFormat::from_path("res/out/final.png").unwrap(),
            ImageFormat::Png
        );
    }

    #[test]
    fn test_rejects_unknown() {
        assert!(ImageFormat::from_path("a.gif").is_err());
        assert!(ImageFormat::from_path("a.tiff").is_err());
        assert!(ImageFormat::from_path("no_extension").is_err());
        assert!(ImageFormat::from_path("trailing.").is_err());
    }
}
