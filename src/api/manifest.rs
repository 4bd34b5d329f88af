//! Manifest client
//!
//! Loads the list of embeddable videos, either over HTTP or from a JSON file
//! next to the site. The manifest is a JSON array of objects with an `id`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::models::VideoItem;

/// Manifest path the site ships with
pub const DEFAULT_MANIFEST: &str = "videos.json";

/// Manifest loading errors
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Manifest server returned HTTP {0}")]
    Http(u16),

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the manifest lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    Url(String),
    File(PathBuf),
}

impl ManifestSource {
    /// `http(s)://` strings are URLs, anything else is a file path
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            ManifestSource::Url(raw.to_string())
        } else {
            ManifestSource::File(PathBuf::from(raw))
        }
    }
}

impl Default for ManifestSource {
    fn default() -> Self {
        ManifestSource::File(PathBuf::from(DEFAULT_MANIFEST))
    }
}

impl std::fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestSource::Url(url) => write!(f, "{}", url),
            ManifestSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Per-request timeout for manifest fetches
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Use the configured client, or a plain one if it could not be built
///
/// The plain client has no request timeout, so the fallback is logged.
fn client_or_default<E: std::fmt::Display>(built: Result<reqwest::Client, E>) -> reqwest::Client {
    built.unwrap_or_else(|e| {
        tracing::warn!(
            "Failed to build HTTP client ({}), falling back to defaults without a {}s timeout",
            e,
            REQUEST_TIMEOUT_SECS
        );
        reqwest::Client::new()
    })
}

/// Parse manifest JSON text
pub fn parse_manifest(text: &str) -> Result<Vec<VideoItem>, ManifestError> {
    Ok(serde_json::from_str(text)?)
}

/// Manifest client
pub struct ManifestClient {
    source: ManifestSource,
    client: reqwest::Client,
}

impl ManifestClient {
    /// Create a client for the given source
    pub fn new(source: ManifestSource) -> Self {
        Self {
            source,
            client: client_or_default(
                reqwest::Client::builder()
                    .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                    .build(),
            ),
        }
    }

    /// Create a client reading `<base_url>/videos.json` (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let url = format!(
            "{}/{}",
            base_url.into().trim_end_matches('/'),
            DEFAULT_MANIFEST
        );
        Self::new(ManifestSource::Url(url))
    }

    pub fn source(&self) -> &ManifestSource {
        &self.source
    }

    /// Fetch and parse the manifest
    pub async fn fetch(&self) -> Result<Vec<VideoItem>, ManifestError> {
        let items = match &self.source {
            ManifestSource::Url(url) => self.fetch_url(url).await?,
            ManifestSource::File(path) => Self::read_file(path).await?,
        };
        tracing::debug!(source = %self.source, count = items.len(), "manifest loaded");
        Ok(items)
    }

    async fn fetch_url(&self, url: &str) -> Result<Vec<VideoItem>, ManifestError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ManifestError::Http(status.as_u16()));
        }

        let text = response.text().await?;
        parse_manifest(&text)
    }

    async fn read_file(path: &Path) -> Result<Vec<VideoItem>, ManifestError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ManifestError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        parse_manifest(&text)
    }
}

impl Default for ManifestClient {
    fn default() -> Self {
        Self::new(ManifestSource::default())
    }
}
