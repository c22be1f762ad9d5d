/// Application configuration
///
/// Read from `<config dir>/art-rater/config.toml`:
/// - Linux: ~/.config/art-rater/config.toml
/// - macOS: ~/Library/Application Support/art-rater/config.toml
/// - Windows: %APPDATA%\art-rater\config.toml
///
/// Every key is optional; the file itself is optional too.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::state::data::ArtworkId;

/// Artworks shown on first launch
const DEFAULT_SEED: [u64; 6] = [27992, 27998, 27999, 27997, 27993, 27994];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog endpoint; artworks are fetched from `{catalog_url}/{id}`
    pub catalog_url: String,
    /// IIIF image server
    pub image_base_url: String,
    /// Size/format suffix appended after the image id
    pub image_variant: String,
    /// Endpoint receiving rating submissions
    pub rating_url: String,
    /// Initial collection
    pub seed: Vec<ArtworkId>,
    pub request_timeout_secs: u64,
    pub toast_duration_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: "https://api.artic.edu/api/v1/artworks".to_string(),
            image_base_url: "https://www.artic.edu/iiif/2".to_string(),
            image_variant: "full/843,/0/default.jpg".to_string(),
            rating_url: "https://20e2q.mocklab.io/rating".to_string(),
            seed: DEFAULT_SEED.iter().copied().map(ArtworkId).collect(),
            request_timeout_secs: 15,
            toast_duration_secs: 4,
        }
    }
}

impl Config {
    /// Load the user's config file, falling back to defaults when there is none
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and parse a specific config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Where the config file is expected, if the platform has a config directory
    pub fn path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("art-rater");
        path.push("config.toml");
        Some(path)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_duration_secs)
    }
}
