//! Brightness adjustment

use rasterlab_core::{Image, ImageMut, Pixel};

/// Add `delta` to every channel of every pixel, clamping to [0, 255].
///
/// A negative delta darkens. The source image is never modified.
pub fn brighten(image: &Image, delta: i32) -> Image {
    let mut out = ImageMut::new(image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let p = image.get_pixel_unchecked(x, y);
            let pixel = Pixel::new(
                shift(p.red(), delta),
                shift(p.green(), delta),
                shift(p.blue(), delta),
            )
            .expect("clamped channel");
            out.set_pixel_unchecked(x, y, pixel);
        }
    }
    out.into()
}

#[inline]
fn shift(channel: u8, delta: i32) -> i32 {
    (channel as i32).saturating_add(delta).clamp(0, 255)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::ImageMut;

    fn single_pixel(r: i32, g: i32, b: i32) -> Image {
        let mut image = ImageMut::new(1, 1);
        image.set_pixel(0, 0, r, g, b).unwrap();
        image.into()
    }

    fn rgb(image: &Image) -> (u8, u8, u8) {
        let p = image.get_pixel(0, 0).unwrap();
        (p.red(), p.green(), p.blue())
    }

    #[test]
    fn test_brighten_and_darken() {
        let image = single_pixel(100, 150, 200);
        assert_eq!(rgb(&brighten(&image, 30)), (130, 180, 230));
        assert_eq!(rgb(&brighten(&image, -50)), (50, 100, 150));
    }

    #[test]
    fn test_clamps_at_boundaries() {
        let image = single_pixel(10, 10, 10);
        assert_eq!(rgb(&brighten(&image, 300)), (255, 255, 255));
        assert_eq!(rgb(&brighten(&image, -300)), (0, 0, 0));
    }

    #[test]
    fn test_round_trip_without_clamping() {
        let mut image = ImageMut::new(2, 2);
        image.set_pixel(0, 0, 100, 110, 120).unwrap();
        image.set_pixel(1, 0, 50, 60, 70).unwrap();
        image.set_pixel(0, 1, 200, 190, 180).unwrap();
        image.set_pixel(1, 1, 128, 128, 128).unwrap();
        let image: Image = image.into();

        // no channel within 40 of a clamp boundary: exact round trip
        let result = brighten(&brighten(&image, 40), -40);
        assert_eq!(result, image);
    }

    #[test]
    fn test_extreme_delta_saturates() {
        let image = single_pixel(128, 128, 128);
        assert_eq!(rgb(&brighten(&image, i32::MAX)), (255, 255, 255));
        assert_eq!(rgb(&brighten(&image, i32::MIN)), (0, 0, 0));
    }
}
