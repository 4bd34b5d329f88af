//! Rotation session
//!
//! Owns the displayed-id state for one page session and threads it through
//! successive selections. A failed manifest load leaves everything as it was.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::render::{render, SlotBoard, DEFAULT_EMBED_HOST};
use super::selection::select_n;
use crate::api::manifest::{ManifestClient, ManifestError};
use crate::models::{DisplayedSet, SlotUpdate, SLOT_COUNT};

/// Rotating reel picker bound to one manifest source
pub struct Rotator {
    client: ManifestClient,
    embed_host: String,
    shown: DisplayedSet,
    board: SlotBoard,
    rng: StdRng,
}

impl Rotator {
    /// Create a session with empty state and [`SLOT_COUNT`] slots
    pub fn new(client: ManifestClient) -> Self {
        Self {
            client,
            embed_host: DEFAULT_EMBED_HOST.to_string(),
            shown: DisplayedSet::new(),
            board: SlotBoard::new(SLOT_COUNT),
            rng: StdRng::from_entropy(),
        }
    }

    /// Use a different embed host
    pub fn with_embed_host(mut self, host: impl Into<String>) -> Self {
        self.embed_host = host.into();
        self
    }

    /// Use a different number of slots
    pub fn with_slot_count(mut self, count: usize) -> Self {
        self.board = SlotBoard::new(count);
        self
    }

    /// Make selections reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Start from ids that are already on screen
    pub fn with_shown(mut self, shown: DisplayedSet) -> Self {
        self.shown = shown;
        self
    }

    pub fn shown(&self) -> &DisplayedSet {
        &self.shown
    }

    pub fn board(&self) -> &SlotBoard {
        &self.board
    }

    /// Load the manifest, pick new items and update the slots
    ///
    /// Errors are logged and swallowed; state and slots stay untouched.
    pub async fn refresh(&mut self) -> Option<Vec<SlotUpdate>> {
        match self.try_refresh().await {
            Ok(updates) => Some(updates),
            Err(e) => {
                tracing::warn!(source = %self.client.source(), "Error loading videos: {}", e);
                None
            }
        }
    }

    /// Like [`Rotator::refresh`] but hands the error back
    pub async fn try_refresh(&mut self) -> Result<Vec<SlotUpdate>, ManifestError> {
        let manifest = self.client.fetch().await?;

        let selection = select_n(&manifest, &self.shown, self.board.len(), &mut self.rng);
        let updates = render(&selection, &self.embed_host);
        self.board.apply(&updates);
        self.shown = selection.newly_shown;

        tracing::info!(
            manifest = manifest.len(),
            shown = ?self.shown.ids(),
            "rotated reels"
        );
        Ok(updates)
    }
}
