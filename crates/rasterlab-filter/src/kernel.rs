//! Convolution kernels
//!
//! A [`Kernel`] is an odd-sized square matrix of real-valued weights,
//! immutable once constructed and stateless with respect to the image it is
//! applied to. The fixed catalog (blur, sharpen) lives here as named
//! constructors.

use crate::{FilterError, FilterResult};

/// A 2D convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Side length; always odd
    size: usize,
    /// Weights in row-major order, `size * size` entries
    data: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from a row-major slice of weights.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `size` is even or zero, or
    /// if `data` does not hold exactly `size * size` weights.
    pub fn from_slice(size: usize, data: &[f64]) -> FilterResult<Self> {
        if size == 0 || size % 2 != 1 {
            return Err(FilterError::InvalidKernel(format!(
                "side length must be odd and >= 1, got {size}"
            )));
        }
        if data.len() != size * size {
            return Err(FilterError::InvalidKernel(format!(
                "{size}x{size} kernel needs {} weights, got {}",
                size * size,
                data.len()
            )));
        }
        Ok(Kernel {
            size,
            data: data.to_vec(),
        })
    }

    /// The 3x3 Gaussian blur kernel.
    ///
    /// Weights `[[1,2,1],[2,4,2],[1,2,1]] / 16`; sums to 1.
    pub fn blur() -> Self {
        Kernel {
            size: 3,
            data: vec![
                0.0625, 0.125, 0.0625, //
                0.125, 0.25, 0.125, //
                0.0625, 0.125, 0.0625,
            ],
        }
    }

    /// The 5x5 sharpening kernel.
    ///
    /// Center 1.0, inner ring 0.25, outer ring -0.125; sums to 1.
    pub fn sharpen() -> Self {
        Kernel {
            size: 5,
            data: vec![
                -0.125, -0.125, -0.125, -0.125, -0.125, //
                -0.125, 0.25, 0.25, 0.25, -0.125, //
                -0.125, 0.25, 1.0, 0.25, -0.125, //
                -0.125, 0.25, 0.25, 0.25, -0.125, //
                -0.125, -0.125, -0.125, -0.125, -0.125,
            ],
        }
    }

    /// Get the side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the center offset, `size / 2`.
    #[inline]
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Get the weight at column `kx`, row `ky`.
    ///
    /// # Panics
    ///
    /// Panics if `kx >= size` or `ky >= size`.
    #[inline]
    pub fn get(&self, kx: usize, ky: usize) -> f64 {
        assert!(kx < self.size && ky < self.size);
        self.data[ky * self.size + kx]
    }

    /// Get the weights in row-major order.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get the sum of all weights.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}
