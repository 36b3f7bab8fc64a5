//! Named image store
//!
//! A mapping from string identifier to [`Image`], created once per session
//! and threaded explicitly through the dispatcher rather than held as
//! process-wide state. Keys are unique; re-adding an existing key
//! overwrites (last write wins).

use crate::error::{ScriptError, ScriptResult};
use rasterlab_core::Image;
use std::collections::HashMap;

/// Identifier-keyed image store.
#[derive(Debug, Default)]
pub struct ImageStore {
    images: HashMap<String, Image>,
}

impl ImageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        ImageStore {
            images: HashMap::new(),
        }
    }

    /// Insert an image under `id`, overwriting any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::InvalidArgument`] if `id` is empty.
    pub fn add(&mut self, id: &str, image: Image) -> ScriptResult<()> {
        if id.is_empty() {
            return Err(ScriptError::InvalidArgument(
                "image id must not be empty".to_string(),
            ));
        }
        self.images.insert(id.to_string(), image);
        Ok(())
    }

    /// Look up an image; absent ids are `None`, not an error.
    pub fn get(&self, id: &str) -> Option<&Image> {
        self.images.get(id)
    }

    /// The full id -> image mapping, for diagnostics and tests.
    pub fn images(&self) -> &HashMap<String, Image> {
        &self.images
    }

    /// Number of stored images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the store holds no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
