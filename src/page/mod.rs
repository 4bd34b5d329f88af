//! Page behaviours outside the reel rotation
//!
//! - `player` - exclusive playback and play buttons
//! - `language` - English/Arabic mode with saved preference
//! - `navbar` - scroll-driven navbar classes

pub mod language;
pub mod navbar;
pub mod player;

pub use language::{LanguageManager, NavLink, PreferenceStore};
pub use navbar::{NavbarState, NavbarThresholds};
pub use player::{PlayerError, PlayerGroup};
