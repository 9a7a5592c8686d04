//! Headless layout dump.
//!
//! Lays out and measures the whole list at a fixed width and prints one
//! JSON object per item, in index order.

use std::io::Write;

use serde::Serialize;
use tracing::info;

use super::TuiError;
use crate::config::ResolvedConfig;
use crate::host::CollectionHost;
use crate::layout::{LayoutAttributes, Rect};

/// One line of dump output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DumpRecord {
    /// Section of the item.
    pub section: usize,
    /// Item within its section.
    pub item: usize,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Frame width.
    pub width: f64,
    /// Frame height.
    pub height: f64,
}

impl From<&LayoutAttributes> for DumpRecord {
    fn from(attributes: &LayoutAttributes) -> Self {
        let frame = attributes.frame();
        Self {
            section: attributes.index().section,
            item: attributes.index().item,
            x: frame.min_x(),
            y: frame.min_y(),
            width: frame.width(),
            height: frame.height(),
        }
    }
}

/// Fully measured layout at `width` columns.
pub fn measure_all(config: &ResolvedConfig, width: u16) -> Vec<DumpRecord> {
    let bounds = Rect::new(0.0, 0.0, f64::from(width), 0.0);
    let mut host = CollectionHost::new(config.data_source(), config.layout_config(), bounds);
    host.layout_all().iter().map(DumpRecord::from).collect()
}

/// Write the fully measured layout as JSON lines.
///
/// Returns the number of records written.
///
/// # Errors
///
/// Fails on serialization or write errors.
pub fn dump_layout<W: Write>(
    config: &ResolvedConfig,
    width: u16,
    out: &mut W,
) -> Result<usize, TuiError> {
    let records = measure_all(config, width);
    for record in &records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    out.flush()?;
    info!(records = records.len(), width, "Layout dumped");
    Ok(records.len())
}
