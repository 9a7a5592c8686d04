//! Vertical stacking layout engine with incremental invalidation

use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::attributes::LayoutAttributes;
use super::cache::LayoutCache;
use super::invalidation::{FallbackReason, InvalidationPath, InvalidationRequest};
use super::types::{EdgeInsets, ItemIndex, Rect, Size};

/// Item enumeration supplied by the host.
///
/// Queried once per full layout pass.
pub trait ItemSource {
    /// Number of sections.
    fn section_count(&self) -> usize;

    /// Number of items in `section`.
    fn item_count(&self, section: usize) -> usize;
}

/// A slice of per-section item counts is the simplest possible source.
impl ItemSource for [usize] {
    fn section_count(&self) -> usize {
        self.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.get(section).copied().unwrap_or(0)
    }
}

impl ItemSource for Vec<usize> {
    fn section_count(&self) -> usize {
        self.as_slice().section_count()
    }

    fn item_count(&self, section: usize) -> usize {
        self.as_slice().item_count(section)
    }
}

/// Fixed layout parameters for one engine instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Gap after every item.
    pub vertical_spacing: f64,
    /// Space around the stacked items.
    pub edge_insets: EdgeInsets,
    /// Placeholder height for items that have not been measured.
    pub estimated_item_height: f64,
}

impl LayoutConfig {
    /// Placeholder height used until an item view measures its content.
    pub const DEFAULT_ESTIMATED_HEIGHT: f64 = 10.0;

    /// Create a config, clamping negative or non-finite values to zero.
    pub fn new(vertical_spacing: f64, edge_insets: EdgeInsets, estimated_item_height: f64) -> Self {
        Self {
            vertical_spacing: non_negative(vertical_spacing),
            edge_insets: EdgeInsets::new(
                non_negative(edge_insets.top),
                non_negative(edge_insets.left),
                non_negative(edge_insets.bottom),
                non_negative(edge_insets.right),
            ),
            estimated_item_height: non_negative(estimated_item_height),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(8.0, EdgeInsets::uniform(20.0), Self::DEFAULT_ESTIMATED_HEIGHT)
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Single-column list layout.
///
/// Items are stacked top to bottom in `ItemIndex` order, each spanning the
/// viewport width minus the horizontal insets. Heights start as an estimate
/// and are corrected one item at a time through
/// [`InvalidationRequest::PreferredSizeChanged`].
///
/// # Layout (full pass)
/// Runs only when the cache is empty: O(n) walk over every index.
///
/// # Invalidation
/// - Full reset / data-count change: clear, next `prepare` recomputes
/// - Width change: widths rewritten in place, origins untouched
/// - Preferred height change: O(k) shift of the k items at or after the
///   changed item
/// - Anything that cannot be patched: clear
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
    cache: LayoutCache,
}

impl LayoutEngine {
    /// Create an engine with an empty cache.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            cache: LayoutCache::new(),
        }
    }

    /// Layout parameters.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Read-only view of the cache.
    pub fn cache(&self) -> &LayoutCache {
        &self.cache
    }

    /// True once a full layout has populated the cache.
    pub fn is_prepared(&self) -> bool {
        !self.cache.is_empty()
    }

    /// Compute the full layout if the cache is empty.
    ///
    /// Returns `true` if a layout pass ran.
    pub fn prepare<S>(&mut self, source: &S, bounds: Rect) -> bool
    where
        S: ItemSource + ?Sized,
    {
        if !self.cache.is_empty() {
            return false;
        }
        self.layout_all(source, bounds);
        true
    }

    /// Walk every index in order and place it below its predecessor.
    ///
    /// Cached heights survive; new items get the estimated height.
    pub(crate) fn layout_all<S>(&mut self, source: &S, bounds: Rect)
    where
        S: ItemSource + ?Sized,
    {
        let indices: BTreeSet<ItemIndex> = (0..source.section_count())
            .flat_map(|section| {
                (0..source.item_count(section)).map(move |item| ItemIndex::new(section, item))
            })
            .collect();

        let pruned = self.cache.retain_indices(&indices);
        self.cache.set_content_bounds(bounds);

        let insets = self.config.edge_insets;
        let width = self.item_width(bounds.width());
        let mut y = insets.top;

        for &index in &indices {
            let height = self
                .cache
                .get(index)
                .map_or(self.config.estimated_item_height, |a| a.height());
            let frame = Rect::new(insets.left, y, width, height);
            match self.cache.get_mut(index) {
                Some(attributes) => attributes.set_frame(frame),
                None => self.cache.set(index, LayoutAttributes::new(index, frame)),
            }
            y += height + self.config.vertical_spacing;
        }

        debug!(
            items = indices.len(),
            pruned,
            width,
            "Full layout computed"
        );
    }

    /// Total scrollable size, derived from the current cache.
    ///
    /// Height is `sum(heights) + n * spacing + top + bottom`.
    pub fn content_size(&self) -> Size {
        let heights: f64 = self.cache.values().map(|a| a.height()).sum();
        let spacing = self.cache.len() as f64 * self.config.vertical_spacing;
        Size::new(
            self.cache.content_bounds().width(),
            heights + spacing + self.config.edge_insets.vertical(),
        )
    }

    /// Attributes for `index`, or `None` if not laid out yet.
    pub fn attributes_for(&self, index: ItemIndex) -> Option<LayoutAttributes> {
        self.cache.get(index)
    }

    /// Attributes whose frame intersects `rect`, in index order.
    ///
    /// Linear scan over the cache.
    pub fn attributes_in(&self, rect: Rect) -> Vec<LayoutAttributes> {
        self.cache
            .values()
            .filter(|a| a.frame().intersects(&rect))
            .copied()
            .collect()
    }

    /// Only a width change affects this layout.
    pub fn should_invalidate_for_bounds_change(&self, new_bounds: Rect) -> bool {
        new_bounds.width() != self.cache.content_bounds().width()
    }

    /// Request describing a move to `new_bounds`.
    pub fn invalidation_for_bounds_change(&self, new_bounds: Rect) -> InvalidationRequest {
        InvalidationRequest::BoundsChanged {
            width_delta: new_bounds.width() - self.cache.content_bounds().width(),
        }
    }

    /// Only height is compared; widths are dictated by the viewport.
    pub fn should_invalidate_for_preferred(
        &self,
        preferred: &LayoutAttributes,
        original: &LayoutAttributes,
    ) -> bool {
        preferred.height() != original.height()
    }

    /// Request describing an item's preferred height.
    pub fn invalidation_for_preferred(
        &self,
        preferred: &LayoutAttributes,
        original: &LayoutAttributes,
    ) -> InvalidationRequest {
        InvalidationRequest::PreferredSizeChanged {
            index: preferred.index(),
            height_delta: preferred.height() - original.height(),
        }
    }

    /// Apply an invalidation request to the cache.
    pub fn invalidate(&mut self, request: InvalidationRequest) -> InvalidationPath {
        let path = match request {
            InvalidationRequest::FullReset | InvalidationRequest::DataCountChanged => {
                self.cache.clear();
                InvalidationPath::Cleared
            }
            InvalidationRequest::BoundsChanged { width_delta } => self.patch_width(width_delta),
            InvalidationRequest::PreferredSizeChanged {
                index,
                height_delta,
            } => self.shift_from(index, height_delta),
        };

        if let InvalidationPath::Fallback { .. } = path {
            self.cache.clear();
        }

        debug!(?request, ?path, items = self.cache.len(), "Layout invalidated");
        path
    }

    fn patch_width(&mut self, width_delta: f64) -> InvalidationPath {
        if !width_delta.is_finite() {
            return fallback(FallbackReason::NonFiniteDelta);
        }
        if self.cache.is_empty() {
            return fallback(FallbackReason::EmptyCache);
        }
        if width_delta == 0.0 {
            return InvalidationPath::Unchanged;
        }

        let mut bounds = self.cache.content_bounds();
        bounds.size.width += width_delta;
        self.cache.set_content_bounds(bounds);

        let width = self.item_width(bounds.width());
        let mut items = 0;
        for attributes in self.cache.values_mut() {
            attributes.set_width(width);
            items += 1;
        }
        InvalidationPath::WidthPatched { items }
    }

    fn shift_from(&mut self, index: ItemIndex, height_delta: f64) -> InvalidationPath {
        if !height_delta.is_finite() {
            return fallback(FallbackReason::NonFiniteDelta);
        }
        let Some(original) = self.cache.get(index) else {
            return fallback(FallbackReason::UnknownIndex);
        };
        if height_delta == 0.0 {
            return InvalidationPath::Unchanged;
        }

        let new_height = (original.height() + height_delta).max(0.0);
        let delta = new_height - original.height();
        let threshold = original.origin().y;

        let mut shifted = 0;
        for attributes in self.cache.values_from_mut(index) {
            if attributes.index() == index {
                attributes.set_height(new_height);
            } else if attributes.origin().y >= threshold {
                attributes.shift_y(delta);
                shifted += 1;
            }
        }

        trace!(%index, new_height, delta, shifted, "Item resized");
        InvalidationPath::HeightShifted { index, shifted }
    }

    fn item_width(&self, viewport_width: f64) -> f64 {
        (viewport_width - self.config.edge_insets.horizontal()).max(0.0)
    }
}

fn fallback(reason: FallbackReason) -> InvalidationPath {
    InvalidationPath::Fallback { reason }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
