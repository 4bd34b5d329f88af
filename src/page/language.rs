//! Bilingual text mode
//!
//! The page runs in English or Arabic. A saved preference wins; without one
//! the browser locale decides. Toggling saves the new choice.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::Language;

/// Key the preference is stored under
pub const PREFERENCE_KEY: &str = "preferredLang";

impl Language {
    /// Resolve the mode from a saved flag and the browser locale
    ///
    /// Arabic if the saved flag is `"ar"`, or if nothing is saved and the
    /// locale starts with `ar` (`ar`, `ar-JO`, `ar-SA`, ...).
    pub fn detect(saved: Option<&str>, locale: Option<&str>) -> Self {
        match saved.filter(|s| !s.is_empty()) {
            Some("ar") => Language::Arabic,
            Some(_) => Language::English,
            None if locale.is_some_and(|l| l.starts_with("ar")) => Language::Arabic,
            None => Language::English,
        }
    }
}

/// Locale reported by the OS, if any
pub fn system_locale() -> Option<String> {
    sys_locale::get_locale()
}

// =============================================================================
// Persisted Preference
// =============================================================================

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(rename = "preferredLang", skip_serializing_if = "Option::is_none")]
    preferred_lang: Option<String>,
}

/// Single-key preference file
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at ~/.config/reelrotor/preferences.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("reelrotor").join("preferences.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved flag, or None when nothing (readable) is stored
    pub fn load(&self) -> Option<String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| toml::from_str::<Preferences>(&s).ok())
            .and_then(|p| p.preferred_lang)
    }

    /// Persist the chosen language
    pub fn save(&self, lang: Language) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let prefs = Preferences {
            preferred_lang: Some(lang.code().to_string()),
        };
        let toml = toml::to_string_pretty(&prefs)?;
        std::fs::write(&self.path, toml)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

// =============================================================================
// Nav Labels
// =============================================================================

/// A navbar link with per-language labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub text: String,
    #[serde(default)]
    pub en: Option<String>,
    #[serde(default)]
    pub ar: Option<String>,
}

impl NavLink {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        let en = en.into();
        Self {
            text: en.clone(),
            en: Some(en),
            ar: Some(ar.into()),
        }
    }
}

/// Swap link text to the active language; links without a label keep theirs
pub fn update_nav_text(links: &mut [NavLink], lang: Language) {
    for link in links {
        let label = match lang {
            Language::English => &link.en,
            Language::Arabic => &link.ar,
        };
        if let Some(label) = label {
            link.text = label.clone();
        }
    }
}

// =============================================================================
// Manager
// =============================================================================

/// Current mode plus its persisted preference
pub struct LanguageManager {
    store: PreferenceStore,
    current: Language,
}

impl LanguageManager {
    /// Resolve the starting mode on page load
    pub fn init(store: PreferenceStore, locale: Option<&str>) -> Self {
        let saved = store.load();
        let current = Language::detect(saved.as_deref(), locale);
        tracing::debug!(?saved, ?locale, %current, "language resolved");
        Self { store, current }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    /// Flip the mode and save it
    pub fn toggle(&mut self) -> Result<Language> {
        self.current = self.current.toggle();
        self.store.save(self.current)?;
        tracing::info!(language = %self.current, "language toggled");
        Ok(self.current)
    }

    /// Apply the current mode to nav links
    pub fn apply(&self, links: &mut [NavLink]) {
        update_nav_text(links, self.current);
    }
}
