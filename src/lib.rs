//! ReelRotor - rotating reels and page behaviours for static video sites
//!
//! Picks which videos fill a page's display slots without repeating what was
//! just on screen, and models the page's other small behaviours as plain
//! state so a host page (or a script) only has to apply the results.
//!
//! # Modules
//!
//! - `models` - Video items, displayed set, slot updates, language
//! - `api` - Manifest client (HTTP or file)
//! - `rotation` - Selection policy, rendering, rotation session
//! - `page` - Exclusive playback, language mode, navbar
//! - `config` - Config file handling
//! - `cli` / `commands` - Scriptable command line

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod page;
pub mod rotation;

// Re-export commonly used types
pub use models::{DisplayedSet, Language, Selection, SlotUpdate, VideoItem, SLOT_COUNT};

pub use api::{ManifestClient, ManifestError, ManifestSource};
pub use rotation::{select, Rotator, SlotBoard};
