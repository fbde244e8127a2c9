use serde::{Deserialize, Serialize};

use crate::geometry::ImageSize;

/// One image handed to the viewer.
///
/// `width`/`height` may be missing; the controller then requests them and the
/// image stays hidden until they arrive. Once known, the size never changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub source: String,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(skip)]
    index: usize,
    #[serde(skip)]
    loaded: bool,
}

impl ImageDescriptor {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            width: None,
            height: None,
            title: None,
            index: 0,
            loaded: false,
        }
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Intrinsic size, if both sides are known and positive.
    pub fn size(&self) -> Option<ImageSize> {
        let size = ImageSize::new(self.width?, self.height?);
        size.is_known().then_some(size)
    }

    /// Position in the list the viewer was opened with.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Set when the pixel data finished loading.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub(crate) fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    pub(crate) fn set_size(&mut self, size: ImageSize) {
        self.width = Some(size.width);
        self.height = Some(size.height);
    }
}

/// Ticket for an asynchronous size lookup.
///
/// `generation` ties the answer to the open session that asked for it, so
/// answers arriving after a close or re-open are dropped.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SizeRequest {
    pub index: usize,
    pub generation: u64,
    pub source: String,
}
