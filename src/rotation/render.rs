//! Slot rendering
//!
//! Turns a [`Selection`] into per-slot embed updates, and keeps a copy of
//! what each slot currently shows.

use serde::Serialize;

use crate::models::{Selection, SlotUpdate, SLOT_COUNT};

/// Default embed host
pub const DEFAULT_EMBED_HOST: &str = "https://www.instagram.com";

/// CSS class given to every injected iframe
pub const IFRAME_CLASS: &str = "reel-iframe";

/// Embed reference for a single video
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedRef {
    pub video_id: String,
    pub url: String,
}

impl EmbedRef {
    /// Build the captioned embed for `id` under `host`
    pub fn new(host: &str, id: &str) -> Self {
        Self {
            video_id: id.to_string(),
            url: embed_url(host, id),
        }
    }

    /// Iframe markup the page injects into a slot container
    pub fn to_iframe_html(&self) -> String {
        format!(
            r#"<iframe src="{}" class="{}" scrolling="no" allowtransparency="true"></iframe>"#,
            self.url, IFRAME_CLASS
        )
    }
}

/// `<host>/p/<id>/embed/captioned/`
pub fn embed_url(host: &str, id: &str) -> String {
    format!(
        "{}/p/{}/embed/captioned/",
        host.trim_end_matches('/'),
        urlencoding::encode(id)
    )
}

/// DOM id of a slot container (1-based on the page)
pub fn slot_element_id(slot: usize) -> String {
    format!("slot-{}", slot + 1)
}

/// Produce one update per chosen item, in slot order
///
/// Slots past the end of `selection.chosen` get no update.
pub fn render(selection: &Selection, host: &str) -> Vec<SlotUpdate> {
    selection
        .chosen
        .iter()
        .enumerate()
        .map(|(slot, item)| {
            let embed = EmbedRef::new(host, &item.id);
            SlotUpdate {
                slot,
                element_id: slot_element_id(slot),
                video_id: embed.video_id,
                embed_url: embed.url,
            }
        })
        .collect()
}

/// Current contents of the page's display slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotBoard {
    slots: Vec<Option<EmbedRef>>,
}

impl Default for SlotBoard {
    fn default() -> Self {
        Self::new(SLOT_COUNT)
    }
}

impl SlotBoard {
    /// A board with `count` empty slots
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![None; count],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&EmbedRef> {
        self.slots.get(slot).and_then(|s| s.as_ref())
    }

    pub fn slots(&self) -> &[Option<EmbedRef>] {
        &self.slots
    }

    /// Replace the content of each addressed slot
    ///
    /// Updates for slots the board doesn't have are skipped. Returns how many
    /// slots changed hands.
    pub fn apply(&mut self, updates: &[SlotUpdate]) -> usize {
        let mut applied = 0;
        for update in updates {
            match self.slots.get_mut(update.slot) {
                Some(slot) => {
                    *slot = Some(EmbedRef {
                        video_id: update.video_id.clone(),
                        url: update.embed_url.clone(),
                    });
                    applied += 1;
                }
                None => {
                    tracing::debug!(element = %update.element_id, "slot missing, skipped");
                }
            }
        }
        applied
    }
}
