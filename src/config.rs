//! Configuration file with the API keys.
//!
//! ```json
//! { "pastebin": { "api_dev_key": "...", "api_user_key": "..." } }
//! ```

use crate::client::Credentials;
use crate::error::{PastebinError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Parsed configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub pastebin: PastebinKeys,
}

/// The `pastebin` section. An absent or empty user key means none.
#[derive(Debug, Clone, Deserialize)]
pub struct PastebinKeys {
    pub api_dev_key: String,
    #[serde(default)]
    pub api_user_key: String,
}

impl Config {
    /// `$HOME/.config/txtcrusher/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("txtcrusher").join("config.json"))
    }

    /// Read and parse the file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config = Self::from_json(&data)
            .map_err(|e| PastebinError::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(|e| PastebinError::Config(e.to_string()))
    }

    /// Credentials for a [`Client`](crate::Client); an empty user key is left unset.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.pastebin.api_dev_key.as_str())
            .with_user_key(self.pastebin.api_user_key.as_str())
    }
}
