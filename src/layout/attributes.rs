//! Per-item layout attributes

use super::types::{ItemIndex, Point, Rect, Size};

/// Placement of a single item: its index and frame.
///
/// Records live in the engine's cache and are patched in place when a
/// single item's height changes. Query methods hand out copies.
///
/// # Invariants
/// - Within one layout pass every frame has the same `x` and `width`
///   (maintained by `LayoutEngine`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutAttributes {
    index: ItemIndex,
    frame: Rect,
}

impl LayoutAttributes {
    /// Create attributes for `index` with the given frame.
    pub fn new(index: ItemIndex, frame: Rect) -> Self {
        Self { index, frame }
    }

    /// The item this record describes.
    pub fn index(&self) -> ItemIndex {
        self.index
    }

    /// Full frame of the item.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Top-left corner of the frame.
    pub fn origin(&self) -> Point {
        self.frame.origin
    }

    /// Size of the frame.
    pub fn size(&self) -> Size {
        self.frame.size
    }

    /// Frame height.
    pub fn height(&self) -> f64 {
        self.frame.size.height
    }

    /// Copy of these attributes with a different height.
    ///
    /// Used by item views to report a preferred size.
    pub fn with_height(mut self, height: f64) -> Self {
        self.frame.size.height = height;
        self
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub(crate) fn set_height(&mut self, height: f64) {
        self.frame.size.height = height;
    }

    pub(crate) fn set_width(&mut self, width: f64) {
        self.frame.size.width = width;
    }

    pub(crate) fn shift_y(&mut self, delta: f64) {
        self.frame.origin.y += delta;
    }
}
