//! CLI - Command Line Interface for ReelRotor
//!
//! Every page behaviour is scriptable. All output is JSON-parseable.
//!
//! # Examples
//!
//! ```bash
//! # Pick reels for the three slots (same as page load)
//! reelrotor
//! reelrotor rotate --manifest https://site.example/videos.json --rounds 3
//!
//! # Language mode
//! reelrotor lang detect --locale ar-JO
//! reelrotor lang toggle
//!
//! # Navbar and players
//! reelrotor navbar 0 80 150 120
//! reelrotor player 3 play:0 play:2 click:2:100:400
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::str::FromStr;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Manifest could not be fetched or parsed
    NetworkError = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// ReelRotor - rotating reels and page behaviours for static video sites
///
/// Run without arguments to rotate the reel slots once.
#[derive(Parser, Debug)]
#[command(
    name = "reelrotor",
    version,
    about = "Rotating reels and page behaviours for static video sites",
    long_about = "Picks fresh videos for the page's display slots without \
                  repeating what was just shown, and models the page's \
                  player, language and navbar behaviour.\n\n\
                  Run without arguments to rotate the slots once.",
    after_help = "EXAMPLES:\n\
                  reelrotor                               Rotate slots once\n\
                  reelrotor rotate --rounds 3 --seed 7    Three rotations, reproducible\n\
                  reelrotor lang detect --locale ar-SA    Resolve language mode\n\
                  reelrotor navbar 0 80 150 120           Replay scroll offsets"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (omit to rotate once)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick videos for the display slots
    #[command(visible_alias = "r")]
    Rotate(RotateCmd),

    /// Print the embed for a single video id
    #[command(visible_alias = "e")]
    Embed(EmbedCmd),

    /// Show, detect or toggle the language mode
    Lang(LangCmd),

    /// Replay scroll offsets through the navbar
    #[command(visible_alias = "nav")]
    Navbar(NavbarCmd),

    /// Replay events through a group of inline players
    #[command(visible_alias = "pl")]
    Player(PlayerCmd),
}

// =============================================================================
// Rotate Command
// =============================================================================

/// Pick up to three videos, preferring ones not currently shown
#[derive(Args, Debug, Default)]
pub struct RotateCmd {
    /// Manifest URL or JSON file (default: config, then videos.json)
    #[arg(long, short = 'm')]
    pub manifest: Option<String>,

    /// Ids currently on screen, comma-separated
    #[arg(long, short = 'p', value_delimiter = ',')]
    pub previous: Vec<String>,

    /// Number of consecutive rotations in one session
    #[arg(long, short = 'n', default_value = "1")]
    pub rounds: u32,

    /// Seed for reproducible picks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Embed host (default: config, then https://www.instagram.com)
    #[arg(long)]
    pub embed_host: Option<String>,

    /// Include iframe markup for each slot
    #[arg(long)]
    pub html: bool,
}

// =============================================================================
// Embed Command
// =============================================================================

/// Build the embed URL for one video
#[derive(Args, Debug)]
pub struct EmbedCmd {
    /// Video id (shortcode)
    #[arg(required = true)]
    pub id: String,

    /// Embed host (default: config, then https://www.instagram.com)
    #[arg(long)]
    pub embed_host: Option<String>,
}

// =============================================================================
// Lang Command
// =============================================================================

/// Language mode operations
#[derive(Args, Debug)]
pub struct LangCmd {
    /// What to do
    #[arg(value_enum, default_value = "show")]
    pub action: LangAction,

    /// Locale to detect from (default: system locale)
    #[arg(long, short = 'l')]
    pub locale: Option<String>,

    /// Preference file (default: config, then ~/.config/reelrotor/preferences.toml)
    #[arg(long)]
    pub prefs: Option<PathBuf>,
}

/// Language action
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LangAction {
    /// Show saved preference and resolved mode
    #[default]
    Show,
    /// Resolve mode from preference and locale
    Detect,
    /// Flip the mode and save it
    Toggle,
}

// =============================================================================
// Navbar Command
// =============================================================================

/// Feed scroll offsets to the navbar
#[derive(Args, Debug)]
pub struct NavbarCmd {
    /// Scroll offsets in pixels, in event order
    #[arg(required = true, allow_negative_numbers = true)]
    pub offsets: Vec<f64>,

    /// Scroll offset when the page loaded
    #[arg(long, default_value = "0")]
    pub start: f64,
}

// =============================================================================
// Player Command
// =============================================================================

/// Feed events to a group of inline players
#[derive(Args, Debug)]
pub struct PlayerCmd {
    /// Number of inline players
    #[arg(required = true)]
    pub count: usize,

    /// Events: play:<i>, pause:<i>, click:<i>:<offset_y>:<height>
    #[arg(required = true)]
    pub events: Vec<PlayerEvent>,

    /// Add a background player (index = count)
    #[arg(long)]
    pub background: bool,
}

/// One player event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum PlayerEvent {
    Play { player: usize },
    Pause { player: usize },
    Click { player: usize, offset_y: f64, height: f64 },
}

impl FromStr for PlayerEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let index = |raw: &str| {
            raw.parse::<usize>()
                .map_err(|_| format!("Invalid player index '{}'", raw))
        };
        let pixels = |raw: &str| {
            raw.parse::<f64>()
                .map_err(|_| format!("Invalid pixel value '{}'", raw))
        };

        match parts.as_slice() {
            ["play", i] => Ok(PlayerEvent::Play { player: index(*i)? }),
            ["pause", i] => Ok(PlayerEvent::Pause { player: index(*i)? }),
            ["click", i, y, h] => Ok(PlayerEvent::Click {
                player: index(*i)?,
                offset_y: pixels(*y)?,
                height: pixels(*h)?,
            }),
            _ => Err(format!(
                "Invalid event '{}' (expected play:<i>, pause:<i> or click:<i>:<y>:<h>)",
                s
            )),
        }
    }
}

// =============================================================================
// JSON Output Structures
// =============================================================================

/// Standard JSON output wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Video Id Validation
// =============================================================================

/// Validate a video shortcode (letters, digits, `_` and `-`)
pub fn validate_video_id(id: &str) -> Result<&str, &'static str> {
    if !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        Ok(id)
    } else {
        Err("Invalid video id (expected letters, digits, '_' or '-')")
    }
}

// =============================================================================
// Tests
// =============================================================================
