//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or reading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    ///
    /// Covers both a missing file and an unreadable one; the
    /// [`std::io::ErrorKind`] of the source distinguishes them.
    #[error("failed to read configuration file: {path}")]
    Read {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file did not contain valid JSON.
    #[error("failed to parse configuration file: {path}")]
    Parse {
        /// Path to the offending file.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// JSON encode/decode error with no file involved.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A read was attempted before any configuration was loaded.
    #[error("configuration is not initialized")]
    NotLoaded,
}

impl ConfigError {
    /// Create a new read error.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a new parse error.
    pub fn parse_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
