//! rasterlab-test - Shared test helpers
//!
//! In-memory image builders and grid assertions used by the integration
//! suites of the other workspace crates. Fixtures are built in code rather
//! than loaded from disk so tests stay self-contained.

use rasterlab_core::{Image, ImageMut};

/// Build an image from rows of (r, g, b) triples.
///
/// All rows must have the same length.
///
/// # Panics
///
/// Panics on ragged rows or out-of-range channel values; test fixtures are
/// expected to be well-formed.
pub fn image_from_rows(rows: &[&[(i32, i32, i32)]]) -> Image {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |row| row.len() as u32);
    let mut image = ImageMut::new(width, height);
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len() as u32, width, "ragged fixture row {y}");
        for (x, &(r, g, b)) in row.iter().enumerate() {
            image
                .set_pixel(x as u32, y as u32, r, g, b)
                .expect("fixture pixel");
        }
    }
    image.into()
}

/// Build a width x height image with every pixel set to (r, g, b).
pub fn solid_image(width: u32, height: u32, r: i32, g: i32, b: i32) -> Image {
    let mut image = ImageMut::new(width, height);
    for y in 0..height {
        for x in 0..width {
            image.set_pixel(x, y, r, g, b).expect("fixture pixel");
        }
    }
    image.into()
}

/// Collect the image into rows of (r, g, b) triples for comparison.
pub fn pixel_rows(image: &Image) -> Vec<Vec<(u8, u8, u8)>> {
    (0..image.height())
        .map(|y| {
            (0..image.width())
                .map(|x| {
                    let p = image.get_pixel(x, y).expect("in-bounds pixel");
                    (p.red(), p.green(), p.blue())
                })
                .collect()
        })
        .collect()
}

/// Assert that every pixel of `image` equals the expected (r, g, b) grid.
///
/// # Panics
///
/// Panics with the first mismatching coordinate.
pub fn assert_pixels(image: &Image, expected: &[&[(u8, u8, u8)]]) {
    assert_eq!(image.height() as usize, expected.len(), "height mismatch");
    for (y, row) in expected.iter().enumerate() {
        assert_eq!(image.width() as usize, row.len(), "width mismatch in row {y}");
        for (x, &want) in row.iter().enumerate() {
            let p = image.get_pixel(x as u32, y as u32).expect("in-bounds pixel");
            let got = (p.red(), p.green(), p.blue());
            assert_eq!(got, want, "pixel mismatch at ({x}, {y})");
        }
    }
}
