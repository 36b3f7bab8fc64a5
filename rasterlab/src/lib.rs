//! rasterlab - Scriptable raster image editor
//!
//! Edits raster images by applying a fixed catalog of pixel- and
//! neighborhood-level transformations (recoloring, brightness adjustment,
//! convolution-based blur/sharpen), addressed through a named image store
//! and driven by a whitespace-tokenized command language.
//!
//! # Example
//!
//! ```
//! use rasterlab::{Image, ImageMut};
//! use rasterlab::filter::Transformation;
//!
//! let mut canvas = ImageMut::new(4, 4);
//! canvas.set_pixel(0, 0, 200, 40, 40).unwrap();
//! let image: Image = canvas.into();
//! let dimmed = Transformation::Brighten(-20).apply(&image);
//! assert_eq!(dimmed.get_pixel(0, 0).unwrap().red(), 180);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterlab_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterlab_filter as filter;
pub use rasterlab_io as io;
pub use rasterlab_script as script;
