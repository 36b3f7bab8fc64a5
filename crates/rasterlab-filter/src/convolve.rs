//! Convolution engine
//!
//! Applies a spatial filter to every pixel of an image, independently per
//! RGB channel. Neighbors that fall outside the image contribute nothing to
//! the weighted sum (no padding or edge replication), so unnormalized
//! kernels darken borders; that is the defined boundary behavior.

use crate::Kernel;
use rasterlab_core::{Image, ImageMut, Pixel};

/// Convolve an image with a kernel.
///
/// For each target pixel (x, y) and kernel cell (kx, ky), the source
/// coordinate is `(x + kx - radius, y + ky - radius)`. In-bounds neighbors
/// accumulate `weight * channel`; out-of-bounds terms are dropped. Each
/// channel sum is clamped to [0, 255] and truncated toward zero.
///
/// The source image is never modified; the result is freshly allocated.
/// A kernel radius at or beyond the image dimensions is valid; most
/// contributions simply drop out.
pub fn convolve(image: &Image, kernel: &Kernel) -> Image {
    let width = image.width();
    let height = image.height();
    let size = kernel.size();
    let radius = kernel.radius() as i64;

    let mut out = ImageMut::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let mut sum_r = 0.0f64;
            let mut sum_g = 0.0f64;
            let mut sum_b = 0.0f64;

            for ky in 0..size {
                let sy = y as i64 + ky as i64 - radius;
                if sy < 0 || sy >= height as i64 {
                    continue;
                }
                for kx in 0..size {
                    let sx = x as i64 + kx as i64 - radius;
                    if sx < 0 || sx >= width as i64 {
                        continue;
                    }

                    let pixel = image.get_pixel_unchecked(sx as u32, sy as u32);
                    let weight = kernel.get(kx, ky);
                    sum_r += weight * pixel.red() as f64;
                    sum_g += weight * pixel.green() as f64;
                    sum_b += weight * pixel.blue() as f64;
                }
            }

            let pixel = clamped_pixel(sum_r, sum_g, sum_b);
            out.set_pixel_unchecked(x, y, pixel);
        }
    }

    out.into()
}

/// Apply the fixed 3x3 Gaussian blur kernel.
pub fn blur(image: &Image) -> Image {
    convolve(image, &Kernel::blur())
}

/// Apply the fixed 5x5 sharpening kernel.
pub fn sharpen(image: &Image) -> Image {
    convolve(image, &Kernel::sharpen())
}

/// Clamp channel sums to [0, 255], truncating toward zero.
#[inline]
fn clamped_pixel(r: f64, g: f64, b: f64) -> Pixel {
    let clamp = |sum: f64| sum.clamp(0.0, 255.0) as i32;
    // clamped values are always in range
    Pixel::new(clamp(r), clamp(g), clamp(b)).expect("clamped channel")
}
