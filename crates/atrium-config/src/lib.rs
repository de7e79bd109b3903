//! Typed startup configuration for the Atrium server.
//!
//! This crate provides the configuration subsystem for Atrium:
//!
//! - [`ServerConfig`] - the two-field startup record (port, web root)
//! - [`read_config_file`] - one-step file read and JSON decode
//! - [`ConfigStore`] - process-wide holder of the active configuration
//! - [`ConfigError`] - what can go wrong, with the offending path attached
//!
//! # Overview
//!
//! The server owns a single [`ConfigStore`], constructed empty at startup
//! and passed to whatever needs configuration. Loading reads a JSON file,
//! decodes it directly into a [`ServerConfig`], and installs the record
//! atomically; reading before any successful load is a fail-fast error
//! rather than a silent default.
//!
//! # Example
//!
//! ```no_run
//! use atrium_config::ConfigStore;
//!
//! # fn main() -> Result<(), atrium_config::ConfigError> {
//! let store = ConfigStore::new();
//! let config = store.load("resources/http.json")?;
//!
//! println!("port: {}", config.port);
//! println!("webRoot: {}", config.web_root);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```json
//! {
//!     "port": "8080",
//!     "webRoot": "webroot"
//! }
//! ```
//!
//! Both values are strings and both are optional (a missing field decodes
//! to `""`). Unknown properties are ignored.

#![warn(missing_docs)]

mod error;
mod loader;
mod schema;
mod store;

pub use error::ConfigError;
pub use loader::read_config_file;
pub use schema::ServerConfig;
pub use store::ConfigStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = ServerConfig::default();
        assert_eq!(config.port, "");
        assert_eq!(config.web_root, "");
    }

    #[test]
    fn test_fresh_store_is_unloaded() {
        let store = ConfigStore::new();
        assert!(!store.is_loaded());
    }
}
