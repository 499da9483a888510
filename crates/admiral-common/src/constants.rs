//! Default endpoints, paths, and wire-level constants.

use std::path::PathBuf;

/// Control-plane URL used when neither flags, environment, nor config set one.
pub const DEFAULT_URL: &str = "http://127.0.0.1:8282";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Directory under `$HOME` holding the CLI configuration.
pub const CONFIG_DIR_NAME: &str = ".admiral-cli";

/// File name of the JSON configuration inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Header carrying the authentication token.
pub const AUTH_TOKEN_HEADER: &str = "x-xenon-auth-token";

/// Prefix marking system-internal custom properties.
pub const HIDDEN_PROPERTY_PREFIX: &str = "__";

/// Collection of compute documents (hosts).
pub const COMPUTE_PATH: &str = "/resources/compute";

/// Collection of credential documents.
pub const CREDENTIALS_PATH: &str = "/core/auth/credentials";

/// Collection of resource pool documents.
pub const RESOURCE_POOLS_PATH: &str = "/resources/pools";

/// Collection of event log documents.
pub const EVENT_LOGS_PATH: &str = "/resources/event-logs";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "admiral";

/// Returns the default config file path, `$HOME/.admiral-cli/config.json`.
///
/// Falls back to a path relative to the working directory when no home
/// directory is set.
pub fn default_config_file() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_or_else(|_| PathBuf::from(CONFIG_DIR_NAME), |home| {
            PathBuf::from(home).join(CONFIG_DIR_NAME)
        })
        .join(CONFIG_FILE_NAME)
}
