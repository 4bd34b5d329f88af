//! CLI Command Handlers
//!
//! Implements all CLI commands by calling the library modules.
//! Each handler takes CLI args and Output, returns ExitCode.

use serde::Serialize;

use crate::api::{ManifestClient, ManifestError};
use crate::cli::{
    validate_video_id, EmbedCmd, ExitCode, LangAction, LangCmd, NavbarCmd, Output, PlayerCmd,
    PlayerEvent, RotateCmd,
};
use crate::config::Config;
use crate::models::{DisplayedSet, Language, SlotUpdate};
use crate::page::language::system_locale;
use crate::page::{LanguageManager, NavbarState, PlayerGroup, PreferenceStore};
use crate::rotation::{EmbedRef, Rotator};

// =============================================================================
// Rotate Command
// =============================================================================

/// One rotation in the session
#[derive(Debug, Serialize)]
pub struct RotationRound {
    pub round: u32,
    pub shown: DisplayedSet,
    pub updates: Vec<SlotUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<Vec<String>>,
}

pub async fn rotate_cmd(cmd: RotateCmd, config: &Config, output: &Output) -> ExitCode {
    let source = config.manifest_source(cmd.manifest.as_deref());
    let embed_host = cmd
        .embed_host
        .clone()
        .unwrap_or_else(|| config.embed_host().to_string());

    output.info(format!("Loading manifest: {}", source));

    let mut rotator = Rotator::new(ManifestClient::new(source))
        .with_embed_host(embed_host)
        .with_slot_count(config.slot_count())
        .with_shown(DisplayedSet::from_ids(cmd.previous));
    if let Some(seed) = cmd.seed {
        rotator = rotator.with_seed(seed);
    }

    let (rounds, failure) = collect_rounds(&mut rotator, cmd.rounds, cmd.html, output).await;

    // Rounds that completed before a failure are still reported
    if !rounds.is_empty() || failure.is_none() {
        if let Err(e) = output.print(&rounds) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
    }

    match failure {
        Some(e) => output.error(
            format!("Failed to load manifest: {}", e),
            ExitCode::NetworkError,
        ),
        None => ExitCode::Success,
    }
}

/// Run up to `rounds` rotations, stopping at the first manifest failure
///
/// Returns the completed rounds and the error that ended the run early, if any.
pub async fn collect_rounds(
    rotator: &mut Rotator,
    rounds: u32,
    html: bool,
    output: &Output,
) -> (Vec<RotationRound>, Option<ManifestError>) {
    let mut completed = Vec::new();
    for round in 1..=rounds.max(1) {
        let updates = match rotator.try_refresh().await {
            Ok(updates) => updates,
            Err(e) => return (completed, Some(e)),
        };

        if updates.is_empty() {
            output.info("Manifest is empty, slots left as they were");
        }
        let html = html.then(|| {
            updates
                .iter()
                .map(|u| {
                    EmbedRef {
                        video_id: u.video_id.clone(),
                        url: u.embed_url.clone(),
                    }
                    .to_iframe_html()
                })
                .collect::<Vec<_>>()
        });
        completed.push(RotationRound {
            round,
            shown: rotator.shown().clone(),
            updates,
            html,
        });
    }
    (completed, None)
}

// =============================================================================
// Embed Command
// =============================================================================

pub fn embed_cmd(cmd: EmbedCmd, config: &Config, output: &Output) -> ExitCode {
    if let Err(e) = validate_video_id(&cmd.id) {
        return output.error(e, ExitCode::InvalidArgs);
    }

    let host = cmd.embed_host.as_deref().unwrap_or(config.embed_host());
    let embed = EmbedRef::new(host, &cmd.id);

    #[derive(Serialize)]
    struct EmbedOutput {
        #[serde(flatten)]
        embed: EmbedRef,
        html: String,
    }

    let html = embed.to_iframe_html();
    if let Err(e) = output.print(EmbedOutput { embed, html }) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

// =============================================================================
// Lang Command
// =============================================================================

/// Language mode report
#[derive(Debug, Serialize)]
pub struct LangStatus {
    pub language: Language,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    pub arabic_mode: bool,
}

pub fn lang_cmd(cmd: LangCmd, config: &Config, output: &Output) -> ExitCode {
    let store = match cmd.prefs {
        Some(path) => PreferenceStore::new(path),
        None => config.preference_store(),
    };
    let locale = cmd.locale.or_else(system_locale);
    let saved = store.load();

    let mut manager = LanguageManager::init(store, locale.as_deref());

    let language = match cmd.action {
        LangAction::Show | LangAction::Detect => manager.current(),
        LangAction::Toggle => match manager.toggle() {
            Ok(lang) => {
                output.info(format!("Switched to {}", lang));
                lang
            }
            Err(e) => {
                return output.error(
                    format!("Failed to save preference: {}", e),
                    ExitCode::Error,
                )
            }
        },
    };

    let status = LangStatus {
        language,
        code: language.code(),
        saved: match cmd.action {
            LangAction::Toggle => Some(language.code().to_string()),
            _ => saved,
        },
        locale: match cmd.action {
            LangAction::Show => None,
            _ => locale,
        },
        arabic_mode: language.is_arabic(),
    };

    if let Err(e) = output.print(&status) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

// =============================================================================
// Navbar Command
// =============================================================================

/// Navbar state after one scroll event
#[derive(Debug, Serialize)]
pub struct NavbarStep {
    pub scroll_y: f64,
    pub hidden: bool,
    pub solid: bool,
    pub classes: Vec<&'static str>,
}

pub fn navbar_cmd(cmd: NavbarCmd, config: &Config, output: &Output) -> ExitCode {
    let mut nav = NavbarState::new(config.navbar_thresholds()).at(cmd.start);

    let steps: Vec<NavbarStep> = cmd
        .offsets
        .iter()
        .map(|&y| {
            nav.on_scroll(y);
            NavbarStep {
                scroll_y: y,
                hidden: nav.hidden,
                solid: nav.solid,
                classes: nav.classes(),
            }
        })
        .collect();

    if let Err(e) = output.print(&steps) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

// =============================================================================
// Player Command
// =============================================================================

/// Player group state after one event
#[derive(Debug, Serialize)]
pub struct PlayerStep {
    #[serde(flatten)]
    pub event: PlayerEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub now_playing: Option<usize>,
    pub paused: Vec<usize>,
    pub buttons_visible: Vec<bool>,
}

pub fn player_cmd(cmd: PlayerCmd, output: &Output) -> ExitCode {
    let mut group = PlayerGroup::new(cmd.count);
    if cmd.background {
        group.add_background();
    }

    let mut steps = Vec::with_capacity(cmd.events.len());
    for event in cmd.events {
        let result = match event {
            PlayerEvent::Play { player } => group.play(player),
            PlayerEvent::Pause { player } => group.pause(player).map(|_| Vec::new()),
            PlayerEvent::Click {
                player,
                offset_y,
                height,
            } => {
                let was_playing = group.now_playing();
                group
                    .click_video(player, offset_y, height)
                    .map(|_| match (was_playing, group.now_playing()) {
                        (Some(prev), Some(now)) if prev != now => vec![prev],
                        _ => Vec::new(),
                    })
            }
        };

        let paused = match result {
            Ok(paused) => paused,
            Err(e) => return output.error(e.to_string(), ExitCode::InvalidArgs),
        };

        steps.push(PlayerStep {
            event,
            now_playing: group.now_playing(),
            paused,
            buttons_visible: group.players().iter().map(|p| p.button_visible()).collect(),
        });
    }

    if let Err(e) = output.print(&steps) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}
