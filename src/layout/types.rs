//! Core layout newtypes and geometry

/// Stable identity of an item: (section, item-within-section).
///
/// Ordering is lexicographic on `(section, item)`, which is also the
/// top-to-bottom stacking order of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ItemIndex {
    /// Section number, 0-indexed.
    pub section: usize,
    /// Item number within the section, 0-indexed.
    pub item: usize,
}

impl ItemIndex {
    /// Create a new index path.
    pub fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl std::fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}

/// A point in layout coordinates. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle: origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent from the origin.
    pub size: Size,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self {
        origin: Point { x: 0.0, y: 0.0 },
        size: Size::ZERO,
    };

    /// Create a rectangle from its components.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Left edge.
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    /// Top edge.
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    /// Right edge (exclusive).
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Bottom edge (exclusive).
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// True if either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    /// Half-open intersection test.
    ///
    /// Rectangles that merely share an edge do not intersect, and an empty
    /// rectangle intersects nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }
}

/// Content insets applied around the stacked items.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    /// Space above the first item.
    pub top: f64,
    /// Space left of every item.
    pub left: f64,
    /// Space below the last item.
    pub bottom: f64,
    /// Space right of every item.
    pub right: f64,
}

impl EdgeInsets {
    /// Create insets from all four sides.
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same inset on every side.
    pub fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Sum of left and right.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod item_index {
        use super::*;

        #[test]
        fn orders_by_section_first() {
            assert!(ItemIndex::new(0, 9) < ItemIndex::new(1, 0));
            assert!(ItemIndex::new(2, 0) > ItemIndex::new(1, 100));
        }

        #[test]
        fn orders_by_item_within_section() {
            assert!(ItemIndex::new(3, 1) < ItemIndex::new(3, 2));
            assert_eq!(ItemIndex::new(3, 2), ItemIndex::new(3, 2));
        }

        #[test]
        fn display_uses_index_path_notation() {
            assert_eq!(ItemIndex::new(1, 4).to_string(), "[1, 4]");
        }
    }

    mod rect {
        use super::*;

        #[test]
        fn edges_are_derived_from_origin_and_size() {
            let rect = Rect::new(2.0, 3.0, 10.0, 4.0);
            assert_eq!(rect.min_x(), 2.0);
            assert_eq!(rect.min_y(), 3.0);
            assert_eq!(rect.max_x(), 12.0);
            assert_eq!(rect.max_y(), 7.0);
        }

        #[test]
        fn overlapping_rects_intersect() {
            let a = Rect::new(0.0, 0.0, 10.0, 10.0);
            let b = Rect::new(5.0, 5.0, 10.0, 10.0);
            assert!(a.intersects(&b));
            assert!(b.intersects(&a));
        }

        #[test]
        fn contained_rect_intersects() {
            let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
            let inner = Rect::new(10.0, 10.0, 1.0, 1.0);
            assert!(outer.intersects(&inner));
            assert!(inner.intersects(&outer));
        }

        #[test]
        fn edge_touching_rects_do_not_intersect() {
            let a = Rect::new(0.0, 0.0, 10.0, 10.0);
            let below = Rect::new(0.0, 10.0, 10.0, 10.0);
            let right = Rect::new(10.0, 0.0, 10.0, 10.0);
            assert!(!a.intersects(&below));
            assert!(!a.intersects(&right));
        }

        #[test]
        fn empty_rect_intersects_nothing() {
            let a = Rect::new(0.0, 0.0, 10.0, 10.0);
            let empty = Rect::new(5.0, 5.0, 0.0, 0.0);
            assert!(empty.is_empty());
            assert!(!a.intersects(&empty));
            assert!(!empty.intersects(&a));
        }
    }

    #[test]
    fn insets_sum_per_axis() {
        let insets = EdgeInsets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(insets.horizontal(), 6.0);
        assert_eq!(insets.vertical(), 4.0);
        assert_eq!(EdgeInsets::uniform(20.0).horizontal(), 40.0);
    }
}
