//! Teapot List
//!
//! A single-column list layout engine with incremental invalidation, plus
//! the collection host and terminal demo that drive it.
//!
//! The engine (`layout`) is pure: it stacks items vertically using cached
//! heights and patches the cache in place when the viewport width or a
//! single item's preferred height changes. The host (`host`) measures item
//! views lazily and feeds corrections back; `view` renders the result with
//! ratatui.

pub mod config;
pub mod host;
pub mod layout;
pub mod logging;
pub mod view;
