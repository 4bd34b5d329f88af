//! Clients for external resources
//!
//! - Manifest: the site's list of embeddable videos

pub mod manifest;

pub use manifest::{ManifestClient, ManifestError, ManifestSource};
