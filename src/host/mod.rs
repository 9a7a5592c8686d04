//! Collection host - glue between data, item views and the layout engine
//!
//! Plays the role of the collection view: it owns the engine and the data
//! source, applies frames to item views, measures items lazily and forwards
//! preferred-size changes back to the engine as invalidation requests.
//!
//! # Module Structure
//!
//! - `data_source`: DataSource trait and the placeholder TeapotDataSource
//! - `item`: TextItem item view, MeasureItem capability, word wrapping

pub mod data_source;
pub mod item;

pub use data_source::{DataSource, TeapotDataSource};
pub use item::{wrap_text, MeasureItem, TextItem};

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::layout::{
    InvalidationPath, InvalidationRequest, ItemIndex, LayoutAttributes, LayoutConfig, LayoutEngine,
    Rect, Size,
};

/// Drives a `LayoutEngine` on behalf of a scrollable list.
///
/// The engine is re-prepared immediately after any invalidation that
/// clears it, so queries on the host always see a complete layout.
///
/// # Measurement
/// Each item is measured at most once per width, and only when it becomes
/// visible. A width change makes every item eligible for re-measurement.
#[derive(Debug, Clone)]
pub struct CollectionHost<S> {
    engine: LayoutEngine,
    source: S,
    bounds: Rect,
    /// Width at which each item was last measured.
    measured: HashMap<ItemIndex, f64>,
}

impl<S: DataSource> CollectionHost<S> {
    /// Create a host and compute the initial (estimated) layout.
    pub fn new(source: S, config: LayoutConfig, bounds: Rect) -> Self {
        let mut host = Self {
            engine: LayoutEngine::new(config),
            source,
            bounds,
            measured: HashMap::new(),
        };
        host.ensure_prepared();
        host
    }

    /// The layout engine.
    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// The current data source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Current viewport bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Total scrollable size.
    pub fn content_size(&self) -> Size {
        self.engine.content_size()
    }

    /// Attributes for `index`, if laid out.
    pub fn attributes_for(&self, index: ItemIndex) -> Option<LayoutAttributes> {
        self.engine.attributes_for(index)
    }

    /// Text displayed by `index`.
    pub fn item_text(&self, index: ItemIndex) -> Option<String> {
        self.source.item_text(index)
    }

    /// Move the viewport. Only width changes reach the engine.
    ///
    /// Returns the invalidation path taken, if any.
    pub fn set_bounds(&mut self, bounds: Rect) -> Option<InvalidationPath> {
        let path = if self.engine.should_invalidate_for_bounds_change(bounds) {
            let request = self.engine.invalidation_for_bounds_change(bounds);
            Some(self.engine.invalidate(request))
        } else {
            None
        };
        self.bounds = bounds;
        self.ensure_prepared();
        path
    }

    /// Replace the data source; item counts may have changed.
    pub fn reload_data(&mut self, source: S) -> InvalidationPath {
        self.source = source;
        self.invalidate_everything(InvalidationRequest::DataCountChanged)
    }

    /// Discard all layout and measurement state.
    pub fn reset(&mut self) -> InvalidationPath {
        self.invalidate_everything(InvalidationRequest::FullReset)
    }

    /// Lay out the items intersecting `rect`, measuring any that have not
    /// been measured at their current width.
    ///
    /// Items are picked for measurement by the rows of `rect`, so a
    /// zero-height estimate placed inside it is still measured. Height
    /// corrections move items, which can change what falls inside `rect`;
    /// passes repeat until one makes no change. Returns the final visible
    /// attributes in index order.
    pub fn layout_visible(&mut self, rect: Rect) -> Vec<LayoutAttributes> {
        self.ensure_prepared();

        let max_passes = self.engine.cache().len() + 1;

        for _ in 0..max_passes {
            let mut changed = false;

            for index in self.indices_in_rows(rect) {
                let Some(original) = self.engine.attributes_for(index) else {
                    continue;
                };
                let width = original.size().width;
                if self.measured.get(&index) == Some(&width) {
                    continue;
                }
                let Some(height) = self.measure_preferred_height(index, width) else {
                    continue;
                };
                self.measured.insert(index, width);

                let preferred = original.with_height(height);
                if !self.engine.should_invalidate_for_preferred(&preferred, &original) {
                    continue;
                }
                let request = self.engine.invalidation_for_preferred(&preferred, &original);
                let path = self.engine.invalidate(request);
                if path.cleared_cache() {
                    warn!(%index, ?path, "Preferred size change cleared the layout");
                    self.measured.clear();
                    self.ensure_prepared();
                }
                changed = true;
            }

            if !changed {
                break;
            }
        }

        self.engine.attributes_in(rect)
    }

    /// Lay out and measure everything, growing the rect with the content
    /// until the content size stops changing.
    pub fn layout_all(&mut self) -> Vec<LayoutAttributes> {
        loop {
            let size = self.engine.content_size();
            self.layout_visible(Rect::new(0.0, 0.0, size.width, size.height));
            if self.engine.content_size() == size {
                return self.engine.cache().values().copied().collect();
            }
        }
    }

    /// Visible items paired with item views that have their frames applied.
    pub fn visible_items(&mut self, rect: Rect) -> Vec<(LayoutAttributes, TextItem)> {
        self.layout_visible(rect)
            .into_iter()
            .filter_map(|attributes| {
                let mut item = TextItem::new(self.source.item_text(attributes.index())?);
                item.apply(&attributes);
                Some((attributes, item))
            })
            .collect()
    }

    /// Items whose vertical extent falls within the rows of `rect`.
    ///
    /// Unlike `attributes_in`, an item of zero height counts when its origin
    /// lies inside the rows.
    fn indices_in_rows(&self, rect: Rect) -> Vec<ItemIndex> {
        if rect.height() <= 0.0 {
            return Vec::new();
        }
        self.engine
            .cache()
            .values()
            .filter(|a| {
                let frame = a.frame();
                frame.min_y() < rect.max_y()
                    && (rect.min_y() < frame.max_y() || rect.min_y() <= frame.min_y())
            })
            .map(LayoutAttributes::index)
            .collect()
    }

    fn invalidate_everything(&mut self, request: InvalidationRequest) -> InvalidationPath {
        self.measured.clear();
        let path = self.engine.invalidate(request);
        self.ensure_prepared();
        path
    }

    fn ensure_prepared(&mut self) {
        if self.engine.prepare(&self.source, self.bounds) {
            debug!(
                items = self.engine.cache().len(),
                width = self.bounds.width(),
                "Host prepared layout"
            );
        }
    }
}

impl<S: DataSource> MeasureItem for CollectionHost<S> {
    fn measure_preferred_height(&self, index: ItemIndex, width: f64) -> Option<f64> {
        let height = TextItem::new(self.source.item_text(index)?).intrinsic_height(width);
        trace!(%index, width, height, "Measured item");
        Some(height)
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
