//! Greyscale recolorings
//!
//! Each variant collapses a pixel's three channels to a single value and
//! writes it to all three output channels. All four are single-pass,
//! per-pixel, and allocate a fresh output image.

use rasterlab_core::{Channel, Image, ImageMut, Pixel};

/// Set every output channel to the selected source channel.
pub fn greyscale_channel(image: &Image, channel: Channel) -> Image {
    recolor(image, |pixel| pixel.channel(channel) as i32)
}

/// Set every output channel to max(r, g, b) of the source pixel.
pub fn greyscale_value(image: &Image) -> Image {
    recolor(image, |pixel| {
        pixel.red().max(pixel.green()).max(pixel.blue()) as i32
    })
}

/// Set every output channel to the truncated average (r + g + b) / 3.
///
/// Integer division, not rounding; round-trip tests depend on it.
pub fn greyscale_intensity(image: &Image) -> Image {
    recolor(image, |pixel| {
        (pixel.red() as i32 + pixel.green() as i32 + pixel.blue() as i32) / 3
    })
}

/// Set every output channel to truncate(0.2126 r + 0.7152 g + 0.0722 b).
pub fn greyscale_luma(image: &Image) -> Image {
    recolor(image, |pixel| {
        (0.2126 * pixel.red() as f64 + 0.7152 * pixel.green() as f64 + 0.0722 * pixel.blue() as f64)
            as i32
    })
}

/// Map each source pixel to a grey level and write it to all three channels.
fn recolor(image: &Image, grey: impl Fn(Pixel) -> i32) -> Image {
    let mut out = ImageMut::new(image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let level = grey(image.get_pixel_unchecked(x, y));
            // grey levels derived from in-range channels stay in range
            let pixel = Pixel::new(level, level, level).expect("grey level");
            out.set_pixel_unchecked(x, y, pixel);
        }
    }
    out.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::ImageMut;

    fn sample_image() -> Image {
        let mut image = ImageMut::new(3, 2);
        image.set_pixel(0, 0, 255, 0, 0).unwrap();
        image.set_pixel(1, 0, 0, 255, 0).unwrap();
        image.set_pixel(2, 0, 0, 0, 255).unwrap();
        image.set_pixel(0, 1, 128, 128, 128).unwrap();
        image.set_pixel(1, 1, 64, 64, 64).unwrap();
        image.set_pixel(2, 1, 100, 100, 100).unwrap();
        image.into()
    }

    fn grey_at(image: &Image, x: u32, y: u32) -> (u8, u8, u8) {
        let p = image.get_pixel(x, y).unwrap();
        (p.red(), p.green(), p.blue())
    }

    #[test]
    fn test_channel_red() {
        let result = greyscale_channel(&sample_image(), Channel::Red);
        assert_eq!(grey_at(&result, 0, 0), (255, 255, 255));
        assert_eq!(grey_at(&result, 1, 0), (0, 0, 0));
        assert_eq!(grey_at(&result, 0, 1), (128, 128, 128));
    }

    #[test]
    fn test_channel_green_and_blue() {
        let image = sample_image();
        let green = greyscale_channel(&image, Channel::Green);
        assert_eq!(grey_at(&green, 1, 0), (255, 255, 255));
        assert_eq!(grey_at(&green, 2, 0), (0, 0, 0));
        let blue = greyscale_channel(&image, Channel::Blue);
        assert_eq!(grey_at(&blue, 2, 0), (255, 255, 255));
        assert_eq!(grey_at(&blue, 0, 0), (0, 0, 0));
    }

    #[test]
    fn test_value_takes_max() {
        let result = greyscale_value(&sample_image());
        assert_eq!(grey_at(&result, 0, 0), (255, 255, 255));
        assert_eq!(grey_at(&result, 1, 1), (64, 64, 64));
    }

    #[test]
    fn test_intensity_truncates() {
        let result = greyscale_intensity(&sample_image());
        // (255 + 0 + 0) / 3 = 85
        assert_eq!(grey_at(&result, 0, 0), (85, 85, 85));
        assert_eq!(grey_at(&result, 1, 0), (85, 85, 85));
        assert_eq!(grey_at(&result, 2, 0), (85, 85, 85));
        // already grey rows are unchanged
        assert_eq!(grey_at(&result, 0, 1), (128, 128, 128));
        assert_eq!(grey_at(&result, 1, 1), (64, 64, 64));
        assert_eq!(grey_at(&result, 2, 1), (100, 100, 100));
    }

    #[test]
    fn test_luma_weights() {
        let result = greyscale_luma(&sample_image());
        // 0.2126 * 255 = 54.2 -> 54
        assert_eq!(grey_at(&result, 0, 0), (54, 54, 54));
        // 0.7152 * 255 = 182.3 -> 182
        assert_eq!(grey_at(&result, 1, 0), (182, 182, 182));
        // 0.0722 * 255 = 18.4 -> 18
        assert_eq!(grey_at(&result, 2, 0), (18, 18, 18));
    }

    #[test]
    fn test_source_untouched() {
        let image = sample_image();
        let _ = greyscale_value(&image);
        assert_eq!(image, sample_image());
    }
}
