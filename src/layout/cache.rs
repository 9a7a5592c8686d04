//! Cache of computed item attributes

use std::collections::{BTreeMap, BTreeSet};

use super::attributes::LayoutAttributes;
use super::types::{ItemIndex, Rect};

/// Item attributes keyed by index, plus the bounds they were computed for.
///
/// Keyed by `ItemIndex` in an ordered map so iteration follows stacking
/// order. Entries are mutated by key; nothing outside the engine holds a
/// handle to a record.
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    attributes: BTreeMap<ItemIndex, LayoutAttributes>,
    /// Viewport bounds recorded at the last full layout or width patch.
    content_bounds: Rect,
}

impl LayoutCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no attributes are cached.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Drop every record. Recorded bounds are kept.
    pub fn clear(&mut self) {
        self.attributes.clear();
    }

    /// Copy of the attributes for `index`, if cached.
    pub fn get(&self, index: ItemIndex) -> Option<LayoutAttributes> {
        self.attributes.get(&index).copied()
    }

    /// All cached attributes, in index order.
    pub fn values(&self) -> impl Iterator<Item = &LayoutAttributes> {
        self.attributes.values()
    }

    /// Insert or replace the record for `index`.
    pub fn set(&mut self, index: ItemIndex, attributes: LayoutAttributes) {
        self.attributes.insert(index, attributes);
    }

    /// Remove every record whose index is not in `valid`.
    ///
    /// Returns the number of records removed.
    pub fn retain_indices(&mut self, valid: &BTreeSet<ItemIndex>) -> usize {
        let before = self.attributes.len();
        self.attributes.retain(|index, _| valid.contains(index));
        before - self.attributes.len()
    }

    /// Bounds recorded for the cached layout.
    pub fn content_bounds(&self) -> Rect {
        self.content_bounds
    }

    pub(crate) fn set_content_bounds(&mut self, bounds: Rect) {
        self.content_bounds = bounds;
    }

    pub(crate) fn get_mut(&mut self, index: ItemIndex) -> Option<&mut LayoutAttributes> {
        self.attributes.get_mut(&index)
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut LayoutAttributes> {
        self.attributes.values_mut()
    }

    /// Records at or after `index` in stacking order.
    pub(crate) fn values_from_mut(
        &mut self,
        index: ItemIndex,
    ) -> impl Iterator<Item = &mut LayoutAttributes> {
        self.attributes.range_mut(index..).map(|(_, attributes)| attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(section: usize, item: usize, y: f64) -> LayoutAttributes {
        LayoutAttributes::new(
            ItemIndex::new(section, item),
            Rect::new(0.0, y, 100.0, 10.0),
        )
    }

    #[test]
    fn new_cache_is_empty() {
        let cache = LayoutCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.content_bounds(), Rect::ZERO);
    }

    #[test]
    fn set_then_get_returns_copy() {
        let mut cache = LayoutCache::new();
        let a = record(0, 0, 0.0);
        cache.set(a.index(), a);

        assert_eq!(cache.get(ItemIndex::new(0, 0)), Some(a));
        assert_eq!(cache.get(ItemIndex::new(0, 1)), None);
    }

    #[test]
    fn values_follow_index_order() {
        let mut cache = LayoutCache::new();
        for (s, i) in [(1, 0), (0, 2), (0, 0), (0, 1)] {
            cache.set(ItemIndex::new(s, i), record(s, i, 0.0));
        }

        let order: Vec<ItemIndex> = cache.values().map(|a| a.index()).collect();
        assert_eq!(
            order,
            vec![
                ItemIndex::new(0, 0),
                ItemIndex::new(0, 1),
                ItemIndex::new(0, 2),
                ItemIndex::new(1, 0),
            ]
        );
    }

    #[test]
    fn clear_drops_records_but_keeps_bounds() {
        let mut cache = LayoutCache::new();
        cache.set(ItemIndex::new(0, 0), record(0, 0, 0.0));
        cache.set_content_bounds(Rect::new(0.0, 0.0, 300.0, 500.0));

        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.content_bounds().width(), 300.0);
    }

    #[test]
    fn retain_indices_prunes_stale_records() {
        let mut cache = LayoutCache::new();
        for i in 0..5 {
            cache.set(ItemIndex::new(0, i), record(0, i, i as f64 * 10.0));
        }
        let valid: BTreeSet<ItemIndex> = (0..3).map(|i| ItemIndex::new(0, i)).collect();

        let removed = cache.retain_indices(&valid);

        assert_eq!(removed, 2);
        assert_eq!(cache.len(), 3);
        assert!(cache.get(ItemIndex::new(0, 3)).is_none());
        assert!(cache.get(ItemIndex::new(0, 2)).is_some());
    }

    #[test]
    fn get_mut_patches_in_place() {
        let mut cache = LayoutCache::new();
        cache.set(ItemIndex::new(0, 0), record(0, 0, 0.0));

        if let Some(a) = cache.get_mut(ItemIndex::new(0, 0)) {
            a.set_height(42.0);
        }

        assert_eq!(cache.get(ItemIndex::new(0, 0)).map(|a| a.height()), Some(42.0));
    }
}
