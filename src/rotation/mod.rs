//! Reel rotation
//!
//! - `selection` - fresh-first random pick of what to show
//! - `render` - embed URLs and slot updates
//! - `rotator` - session state across refreshes

pub mod render;
pub mod rotator;
pub mod selection;

pub use render::{embed_url, render, EmbedRef, SlotBoard};
pub use rotator::Rotator;
pub use selection::{select, select_n, select_random};
