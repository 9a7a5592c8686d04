//! Invalidation requests and the paths the engine takes to service them

use super::types::ItemIndex;

/// What triggered a re-layout.
///
/// Dispatched exhaustively by `LayoutEngine::invalidate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidationRequest {
    /// Discard everything; the next query re-runs the full layout.
    FullReset,

    /// The number of sections or items changed.
    DataCountChanged,

    /// The viewport width changed by `width_delta`.
    BoundsChanged {
        /// New width minus recorded width.
        width_delta: f64,
    },

    /// One item measured a different preferred height.
    PreferredSizeChanged {
        /// The item that was measured.
        index: ItemIndex,
        /// Preferred height minus cached height.
        height_delta: f64,
    },
}

/// The cache mutation performed for a request.
///
/// Returned from `LayoutEngine::invalidate` and logged at the decision
/// point so callers and tests can tell which branch ran.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidationPath {
    /// Cache dropped on request (full reset or data-count change).
    Cleared,

    /// Item widths rewritten in place after a width change.
    WidthPatched {
        /// Number of records touched.
        items: usize,
    },

    /// One item resized and everything below it moved.
    HeightShifted {
        /// The resized item.
        index: ItemIndex,
        /// Number of records moved down (or up) by the delta.
        shifted: usize,
    },

    /// Zero delta; nothing to do.
    Unchanged,

    /// Request could not be serviced incrementally; cache dropped.
    Fallback {
        /// Why the incremental path was refused.
        reason: FallbackReason,
    },
}

/// Why an incremental invalidation fell back to clearing the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The preferred-size change names an item with no cached attributes.
    UnknownIndex,
    /// The delta was NaN or infinite.
    NonFiniteDelta,
    /// A bounds change arrived before any layout was computed.
    EmptyCache,
}

impl InvalidationPath {
    /// True if this path dropped the cache.
    pub fn cleared_cache(&self) -> bool {
        matches!(self, Self::Cleared | Self::Fallback { .. })
    }
}
