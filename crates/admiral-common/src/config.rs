//! Configuration model for the Admiral CLI.
//!
//! Values are layered: built-in defaults, then the JSON config file, then
//! whatever the caller overrides from flags or the environment.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AdmiralError, Result};

/// Root configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdmiralConfig {
    /// Base URL of the control plane.
    pub url: String,
    /// Authentication token sent with every request.
    pub token: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AdmiralConfig {
    fn default() -> Self {
        Self {
            url: crate::constants::DEFAULT_URL.to_string(),
            token: None,
            timeout_secs: crate::constants::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AdmiralConfig {
    /// Loads the config file at `path`, or the defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| AdmiralError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| AdmiralError::Config {
            message: format!("{}: {e}", path.display()),
        })?;
        tracing::debug!(path = %path.display(), url = %config.url, "loaded config file");
        Ok(config)
    }

    /// Applies flag or environment overrides on top of the loaded values.
    #[must_use]
    pub fn with_overrides(mut self, url: Option<String>, token: Option<String>) -> Self {
        if let Some(url) = url {
            self.url = url;
        }
        if token.is_some() {
            self.token = token;
        }
        self
    }
}
