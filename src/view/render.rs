//! Drawing laid-out items and the status bar into a ratatui frame.
//!
//! Pure with respect to application state: callers lay out first, then pass
//! the visible items and the scroll offset in.

use ratatui::layout::Rect as Area;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::host::TextItem;
use crate::layout::LayoutAttributes;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Summary shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Status {
    /// Number of laid-out items.
    pub items: usize,
    /// Total content height in rows.
    pub content_height: f64,
    /// Current vertical scroll offset in rows.
    pub scroll_y: f64,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} items | height {} | offset {}",
            self.items, self.content_height, self.scroll_y
        )
    }
}

/// Area available to the list: everything above the status bar.
pub fn list_area(area: Area) -> Area {
    Area {
        height: area.height.saturating_sub(STATUS_BAR_HEIGHT),
        ..area
    }
}

/// The bottom row of `area`.
pub fn status_area(area: Area) -> Area {
    let height = area.height.min(STATUS_BAR_HEIGHT);
    Area {
        y: area.bottom().saturating_sub(height),
        height,
        ..area
    }
}

/// Draw the list and status bar filling `frame`.
pub fn render(frame: &mut Frame, items: &[(LayoutAttributes, TextItem)], status: &Status) {
    let area = frame.area();
    render_items(frame, list_area(area), items, status.scroll_y);
    render_status(frame, status_area(area), status);
}

/// Draw each item at its frame, translated up by `scroll_y`.
///
/// Items partially above the area are clipped at the top; items running past
/// the bottom are cut off.
pub fn render_items(
    frame: &mut Frame,
    area: Area,
    items: &[(LayoutAttributes, TextItem)],
    scroll_y: f64,
) {
    for (attributes, item) in items {
        let Some((target, clipped)) = item_area(area, attributes, scroll_y) else {
            continue;
        };
        let lines: Vec<Line> = item.lines().into_iter().map(Line::from).collect();
        frame.render_widget(Paragraph::new(Text::from(lines)).scroll((clipped, 0)), target);
    }
}

/// Draw the one-row status bar.
pub fn render_status(frame: &mut Frame, area: Area, status: &Status) {
    if area.height == 0 {
        return;
    }
    let bar = Paragraph::new(status.to_string())
        .style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_widget(bar, area);
}

/// Screen area of one item and the number of rows hidden above `area`.
///
/// `None` if nothing of the item is on screen.
fn item_area(area: Area, attributes: &LayoutAttributes, scroll_y: f64) -> Option<(Area, u16)> {
    let frame = attributes.frame();
    let top = frame.min_y() - scroll_y;
    let bottom = frame.max_y() - scroll_y;
    if bottom <= 0.0 || top >= f64::from(area.height) {
        return None;
    }

    let clipped = cells(-top);
    let y = area.y.saturating_add(cells(top));
    let x = area.x.saturating_add(cells(frame.min_x()));
    if x >= area.right() {
        return None;
    }

    let width = cells(frame.width()).min(area.right() - x);
    let height = cells(bottom - top.max(0.0)).min(area.bottom().saturating_sub(y));
    if width == 0 || height == 0 {
        return None;
    }

    Some((
        Area {
            x,
            y,
            width,
            height,
        },
        clipped,
    ))
}

/// Layout units to whole terminal cells, saturating at the `u16` range.
fn cells(value: f64) -> u16 {
    // `as` saturates and maps NaN to zero.
    value.max(0.0).floor() as u16
}
