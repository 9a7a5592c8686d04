//! Item view hosting a word-wrapped text label

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::layout::{ItemIndex, LayoutAttributes};

/// Capability to measure an item's true preferred height at a width.
///
/// Provided by the host, never by the layout engine.
pub trait MeasureItem {
    /// Preferred height of `index` when laid out `width` units wide.
    ///
    /// `None` if the index has no content.
    fn measure_preferred_height(&self, index: ItemIndex, width: f64) -> Option<f64>;
}

/// Item view displaying wrapped text, one line per layout unit.
///
/// The host applies layout attributes to it, then asks for the attributes
/// that fit its content. Rendered lines come from the same wrapping used
/// for measurement, so a measured item always renders at its frame height.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    text: String,
    /// Width the label must wrap to; set by `apply`.
    preferred_max_layout_width: Option<f64>,
}

impl TextItem {
    /// Create an item view for `text`. Not yet laid out.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            preferred_max_layout_width: None,
        }
    }

    /// The unwrapped text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Width applied by the last `apply` call.
    pub fn preferred_max_layout_width(&self) -> Option<f64> {
        self.preferred_max_layout_width
    }

    /// Take on a frame from the layout. The label wraps to the frame width.
    pub fn apply(&mut self, attributes: &LayoutAttributes) {
        self.preferred_max_layout_width = Some(attributes.size().width);
    }

    /// Copy of `attributes` with the height this item needs at their width.
    pub fn preferred_attributes_fitting(&self, attributes: &LayoutAttributes) -> LayoutAttributes {
        attributes.with_height(self.intrinsic_height(attributes.size().width))
    }

    /// Number of wrapped lines at `width`.
    pub fn intrinsic_height(&self, width: f64) -> f64 {
        self.wrapped_lines(width).len() as f64
    }

    /// Text wrapped to `width` columns.
    pub fn wrapped_lines(&self, width: f64) -> Vec<String> {
        wrap_text(&self.text, columns(width))
    }

    /// Text wrapped to the applied width (unwrapped lines before `apply`).
    pub fn lines(&self) -> Vec<String> {
        match self.preferred_max_layout_width {
            Some(width) => self.wrapped_lines(width),
            None => self.text.split('\n').map(str::to_owned).collect(),
        }
    }
}

fn columns(width: f64) -> usize {
    if width.is_finite() && width >= 1.0 {
        width.floor() as usize
    } else {
        1
    }
}

/// Greedy word wrap by display width.
///
/// Every source line yields at least one output line. Words wider than
/// `width` are broken at character boundaries.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for source_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in source_line.split_whitespace() {
            let word_width = word.width();

            if word_width > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current_width = 0;
                for c in word.chars() {
                    let char_width = c.width().unwrap_or(0);
                    if current_width + char_width > width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(c);
                    current_width += char_width;
                }
                continue;
            }

            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };
            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_width = needed;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_owned()));
                current_width = word_width;
            }
        }

        lines.push(current);
    }

    lines
}
