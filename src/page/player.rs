//! Exclusive playback among inline players
//!
//! Each inline player gets a play button that is shown while the player is
//! paused. Starting one player pauses every other inline player; a
//! background player is never touched.

use serde::Serialize;
use thiserror::Error;

/// Height of the native control bar at the bottom of a player, in pixels.
/// Clicks inside it are left to the native controls.
pub const CONTROL_BAR_HEIGHT: f64 = 50.0;

/// Player group errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlayerError {
    #[error("No player at index {0}")]
    UnknownPlayer(usize),
}

/// One inline video player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InlinePlayer {
    pub playing: bool,
    /// Background players ignore the exclusivity rule
    pub background: bool,
}

impl InlinePlayer {
    /// The injected play button is visible while paused
    pub fn button_visible(&self) -> bool {
        !self.playing
    }
}

/// Set of players on one page
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlayerGroup {
    players: Vec<InlinePlayer>,
}

impl PlayerGroup {
    /// `count` paused inline players
    pub fn new(count: usize) -> Self {
        Self {
            players: vec![InlinePlayer::default(); count],
        }
    }

    /// Add a background player and return its index
    pub fn add_background(&mut self) -> usize {
        self.players.push(InlinePlayer {
            playing: false,
            background: true,
        });
        self.players.len() - 1
    }

    pub fn players(&self) -> &[InlinePlayer] {
        &self.players
    }

    pub fn get(&self, index: usize) -> Option<&InlinePlayer> {
        self.players.get(index)
    }

    /// Index of the inline (non-background) player currently playing
    pub fn now_playing(&self) -> Option<usize> {
        self.players
            .iter()
            .position(|p| p.playing && !p.background)
    }

    /// Start a player and pause the other inline players
    ///
    /// Returns the indices that were paused as a result. Starting a
    /// background player pauses nothing.
    pub fn play(&mut self, index: usize) -> Result<Vec<usize>, PlayerError> {
        self.check(index)?;
        self.players[index].playing = true;

        let mut paused = Vec::new();
        if self.players[index].background {
            return Ok(paused);
        }

        for (i, other) in self.players.iter_mut().enumerate() {
            if i != index && !other.background && other.playing {
                other.playing = false;
                paused.push(i);
            }
        }

        if !paused.is_empty() {
            tracing::debug!(playing = index, ?paused, "paused other players");
        }
        Ok(paused)
    }

    /// Pause a player; its play button comes back
    pub fn pause(&mut self, index: usize) -> Result<(), PlayerError> {
        self.check(index)?;
        self.players[index].playing = false;
        Ok(())
    }

    /// Handle a click on the video surface
    ///
    /// Toggles playback unless the click landed on the control bar or the
    /// player is a background one. Returns whether a toggle happened.
    pub fn click_video(
        &mut self,
        index: usize,
        offset_y: f64,
        height: f64,
    ) -> Result<bool, PlayerError> {
        self.check(index)?;
        if self.players[index].background || offset_y >= height - CONTROL_BAR_HEIGHT {
            return Ok(false);
        }

        if self.players[index].playing {
            self.pause(index)?;
        } else {
            self.play(index)?;
        }
        Ok(true)
    }

    fn check(&self, index: usize) -> Result<(), PlayerError> {
        if index < self.players.len() {
            Ok(())
        } else {
            Err(PlayerError::UnknownPlayer(index))
        }
    }
}
