//! Atrium server bootstrap.
//!
//! Wires the configuration subsystem into process startup: the binary
//! builds a [`ConfigStore`], runs [`start`] against the fixed
//! `resources/http.json` path, and reports the loaded values. Keeping the
//! load step in a library function lets tests drive it with their own
//! store and file.

#![warn(missing_docs)]

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use atrium_config::{ConfigError, ConfigStore, ServerConfig};

/// Configuration file consumed at startup, relative to the working
/// directory.
pub const DEFAULT_CONFIG_PATH: &str = "resources/http.json";

/// Load the server configuration at `path` into `store`.
///
/// The caller owns the store and keeps it for the lifetime of the
/// process; later subsystems read configuration from the same handle they
/// were given rather than through a global accessor.
///
/// # Errors
///
/// Propagates [`ConfigError`] from the load unchanged; the store is left
/// as it was on failure.
pub fn start(
    store: &ConfigStore,
    path: impl AsRef<Path>,
) -> Result<Arc<ServerConfig>, ConfigError> {
    let path = path.as_ref();

    info!(path = %path.display(), "loading server configuration");
    let config = store.load(path)?;
    info!(port = %config.port, web_root = %config.web_root, "server configuration loaded");

    Ok(config)
}
