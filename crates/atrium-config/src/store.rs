//! Process-wide configuration store.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{loader, ConfigError, ServerConfig};

/// Holder of the single active [`ServerConfig`].
///
/// The store is constructed empty at startup and handed to whatever needs
/// configuration; there is no hidden global accessor, so each test can
/// build its own isolated store. Reads before the first successful
/// [`load`](Self::load) fail with [`ConfigError::NotLoaded`] rather than
/// producing a default.
///
/// The slot holds an atomically swapped immutable handle behind a
/// read-write lock, which makes interleaved `load` and `current` calls
/// from multiple threads safe. The intended usage is still a single load
/// at startup before any readers exist; concurrent loaders race on which
/// record ends up installed.
///
/// # Example
///
/// ```no_run
/// use atrium_config::ConfigStore;
///
/// # fn main() -> Result<(), atrium_config::ConfigError> {
/// let store = ConfigStore::new();
/// store.load("resources/http.json")?;
///
/// let config = store.current()?;
/// println!("port: {}", config.port);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ConfigStore {
    current: RwLock<Option<Arc<ServerConfig>>>,
}

impl ConfigStore {
    /// Create an empty store with no configuration loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the configuration file at `path` and install it as the
    /// current configuration.
    ///
    /// The file is read and decoded in full before the slot is touched,
    /// so a failed load leaves whatever was installed before unchanged. A
    /// successful load fully replaces the prior record; nothing is
    /// merged. Returns the newly installed record.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Arc<ServerConfig>, ConfigError> {
        let config = Arc::new(loader::read_config_file(path)?);
        *self.current.write() = Some(Arc::clone(&config));
        Ok(config)
    }

    /// The most recently loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotLoaded`] if no load has ever succeeded.
    pub fn current(&self) -> Result<Arc<ServerConfig>, ConfigError> {
        self.current
            .read()
            .as_ref()
            .map(Arc::clone)
            .ok_or(ConfigError::NotLoaded)
    }

    /// Whether a configuration has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.current.read().is_some()
    }
}
