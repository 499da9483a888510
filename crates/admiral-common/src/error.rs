//! Unified error types for the Admiral CLI workspace.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum AdmiralError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A remote document was not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Type of the missing resource.
        kind: &'static str,
        /// Identifier of the missing resource.
        id: String,
    },

    /// The control plane answered with a non-success status.
    #[error("HTTP {status} from {method} {url}")]
    Http {
        /// Request method.
        method: &'static str,
        /// Full request URL.
        url: String,
        /// Response status code.
        status: u16,
    },

    /// The request could not be sent or the body could not be read.
    #[error("request to {url} failed: {message}")]
    Request {
        /// Full request URL.
        url: String,
        /// Transport-level failure description.
        message: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, AdmiralError>;
