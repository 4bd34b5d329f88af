//! Data structures and types for ReelRotor
//!
//! Shared models organized by domain:
//! - **Manifest**: video descriptors and the displayed-id set
//! - **Render**: slot updates handed to the host page
//! - **Language**: bilingual text mode

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Number of fixed display slots on the page
pub const SLOT_COUNT: usize = 3;

// =============================================================================
// Manifest Models
// =============================================================================

/// One embeddable video from the manifest
///
/// Only `id` carries meaning. Whatever else the manifest entry holds
/// (titles, captions, thumbnails) rides along untouched in `meta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoItem {
    pub id: String,
    #[serde(flatten)]
    pub meta: serde_json::Map<String, serde_json::Value>,
}

impl VideoItem {
    /// Create an item with no display metadata
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            meta: serde_json::Map::new(),
        }
    }
}

impl fmt::Display for VideoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.meta.get("title").and_then(|t| t.as_str()) {
            Some(title) => write!(f, "{} ({})", title, self.id),
            None => write!(f, "{}", self.id),
        }
    }
}

/// Ordered ids currently on screen
///
/// Replaced wholesale after every selection, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayedSet {
    ids: Vec<String>,
}

impl DisplayedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from ids, dropping repeats (first occurrence wins)
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let ids = ids
            .into_iter()
            .map(Into::into)
            .filter(|id: &String| seen.insert(id.clone()))
            .collect();
        Self { ids }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|shown| shown == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Result of one selection pass
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Selection {
    /// Chosen items in slot order
    pub chosen: Vec<VideoItem>,
    /// Ids of `chosen`; becomes the next call's `previously_shown`
    pub newly_shown: DisplayedSet,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }
}

// =============================================================================
// Render Models
// =============================================================================

/// Replacement content for one display slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotUpdate {
    /// Zero-based slot index
    pub slot: usize,
    /// DOM element id of the slot container (`slot-1`, `slot-2`, ...)
    pub element_id: String,
    /// Id of the video placed in the slot
    pub video_id: String,
    /// Embed URL for the slot's iframe
    pub embed_url: String,
}

// =============================================================================
// Language Models
// =============================================================================

/// Text mode of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    /// Value stored under the persisted preference key
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    /// Flip between the two modes
    pub fn toggle(self) -> Self {
        match self {
            Language::English => Language::Arabic,
            Language::Arabic => Language::English,
        }
    }

    pub fn is_arabic(&self) -> bool {
        matches!(self, Language::Arabic)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Arabic => write!(f, "Arabic"),
        }
    }
}
