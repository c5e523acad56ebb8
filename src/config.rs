/// Application configuration
///
/// Settings are read from `<config dir>/animal-board/config.json` at startup.
/// A missing file is the normal case and yields the defaults below, which
/// mirror the development server: endpoint on 127.0.0.1:5000, a 16 MiB upload
/// cap and the classic document/image/archive extension list.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default upload endpoint (the development server address)
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/upload";

/// Default picture-load timeout in seconds
const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 10;

/// Default upload size cap (16 MiB, the server's MAX_CONTENT_LENGTH)
const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint accepting multipart POSTs on form field "file"
    pub endpoint: String,
    /// Seconds to wait for an animal picture before showing the fallback
    pub image_timeout_secs: u64,
    /// Maximum upload size in bytes; larger files are rejected locally
    pub max_upload_bytes: u64,
    /// Upload extension allow list (lowercase, no dots); empty disables the check
    pub allowed_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            image_timeout_secs: DEFAULT_IMAGE_TIMEOUT_SECS,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_extensions: [
                "txt", "pdf", "png", "jpg", "jpeg", "gif", "doc", "docx", "xls", "xlsx", "zip",
                "rar",
            ]
            .iter()
            .map(|ext| ext.to_string())
            .collect(),
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults if it is missing
    /// or malformed. A malformed file is reported but never fatal.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(config) => {
                    tracing::info!("loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("ignoring malformed config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            // Missing file: first run, use defaults
            Err(_) => Self::default(),
        }
    }

    /// Where the config file lives:
    /// - Linux: ~/.config/animal-board/config.json
    /// - macOS: ~/Library/Application Support/animal-board/config.json
    /// - Windows: %APPDATA%\animal-board\config.json
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("animal-board").join("config.json"))
    }

    /// Picture-load timeout as a `Duration`
    pub fn image_timeout(&self) -> Duration {
        Duration::from_secs(self.image_timeout_secs)
    }
}
