//! Data sources feeding the collection host

use crate::layout::{ItemIndex, ItemSource};

/// Item enumeration plus the text each item displays.
pub trait DataSource: ItemSource {
    /// Text for `index`, or `None` if the index is out of range.
    fn item_text(&self, index: ItemIndex) -> Option<String>;
}

/// Placeholder data: a grid of sections, every item showing the same
/// three-line rhyme with its own index path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeapotDataSource {
    sections: usize,
    items_per_section: usize,
}

impl TeapotDataSource {
    /// Default number of sections.
    pub const DEFAULT_SECTIONS: usize = 7;
    /// Default number of items in every section.
    pub const DEFAULT_ITEMS_PER_SECTION: usize = 7;

    /// Create a source with `sections` sections of `items_per_section` items.
    pub fn new(sections: usize, items_per_section: usize) -> Self {
        Self {
            sections,
            items_per_section,
        }
    }

    /// Number of sections.
    pub fn sections(&self) -> usize {
        self.sections
    }

    /// Items in every section.
    pub fn items_per_section(&self) -> usize {
        self.items_per_section
    }

    /// Total number of items.
    pub fn len(&self) -> usize {
        self.sections * self.items_per_section
    }

    /// True if there are no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Same grid with a different section count.
    pub fn with_sections(self, sections: usize) -> Self {
        Self { sections, ..self }
    }
}

impl Default for TeapotDataSource {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SECTIONS, Self::DEFAULT_ITEMS_PER_SECTION)
    }
}

impl ItemSource for TeapotDataSource {
    fn section_count(&self) -> usize {
        self.sections
    }

    fn item_count(&self, section: usize) -> usize {
        if section < self.sections {
            self.items_per_section
        } else {
            0
        }
    }
}

impl DataSource for TeapotDataSource {
    fn item_text(&self, index: ItemIndex) -> Option<String> {
        if index.section >= self.sections || index.item >= self.items_per_section {
            return None;
        }
        Some(format!(
            "I'm a little teapot short and stout\nHere is my index: {index}\nHere is my stout: 🍺"
        ))
    }
}
