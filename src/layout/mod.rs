//! Layout engine - placement, caching and incremental invalidation
//!
//! Pure core: no I/O, no terminal types. The host supplies item counts and
//! measured heights; the engine does the geometric bookkeeping.
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (ItemIndex, Point, Size, Rect, EdgeInsets)
//! - `attributes`: LayoutAttributes - one item's index and frame
//! - `invalidation`: InvalidationRequest / InvalidationPath
//! - `cache`: LayoutCache - attributes keyed by index plus recorded bounds
//! - `engine`: LayoutEngine - full layout, queries, invalidation

pub mod attributes;
pub mod cache;
pub mod engine;
pub mod invalidation;
pub mod types;

pub use attributes::LayoutAttributes;
pub use cache::LayoutCache;
pub use engine::{ItemSource, LayoutConfig, LayoutEngine};
pub use invalidation::{FallbackReason, InvalidationPath, InvalidationRequest};
pub use types::{EdgeInsets, ItemIndex, Point, Rect, Size};
