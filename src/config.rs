//! Configuration management for ReelRotor
//!
//! Handles config file loading/saving.
//! Config is stored at ~/.config/reelrotor/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::api::manifest::{ManifestSource, DEFAULT_MANIFEST};
use crate::models::SLOT_COUNT;
use crate::page::navbar::NavbarThresholds;
use crate::page::PreferenceStore;
use crate::rotation::render::DEFAULT_EMBED_HOST;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Manifest URL or file path
    pub manifest: Option<String>,
    /// Host used to build embed URLs
    pub embed_host: Option<String>,
    /// Number of display slots
    pub slot_count: Option<usize>,
    /// Where the language preference is kept
    pub preferences_path: Option<PathBuf>,
    /// Navbar scroll thresholds
    pub navbar: Option<NavbarThresholds>,
}

impl Config {
    /// Get config file path (~/.config/reelrotor/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("reelrotor").join("config.toml"))
    }

    /// Load config from the default location, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .map(|p| Self::load_from(&p))
            .unwrap_or_default()
    }

    /// Load config from an explicit file, or return default if unreadable
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(s) => toml::from_str(&s).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), "Ignoring invalid config: {}", e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;
        self.save_to(&path)
    }

    /// Save config to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Manifest source: explicit override, then config, then `videos.json`
    pub fn manifest_source(&self, override_with: Option<&str>) -> ManifestSource {
        let raw = override_with
            .or(self.manifest.as_deref())
            .unwrap_or(DEFAULT_MANIFEST);
        ManifestSource::parse(raw)
    }

    pub fn embed_host(&self) -> &str {
        self.embed_host.as_deref().unwrap_or(DEFAULT_EMBED_HOST)
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count.unwrap_or(SLOT_COUNT)
    }

    pub fn navbar_thresholds(&self) -> NavbarThresholds {
        self.navbar.unwrap_or_default()
    }

    /// Preference store with fallback chain:
    /// 1. `preferences_path` from config
    /// 2. ~/.config/reelrotor/preferences.toml
    /// 3. preferences.toml in the working directory
    pub fn preference_store(&self) -> PreferenceStore {
        let path = self
            .preferences_path
            .clone()
            .or_else(PreferenceStore::default_path)
            .unwrap_or_else(|| PathBuf::from("preferences.toml"));
        PreferenceStore::new(path)
    }
}
