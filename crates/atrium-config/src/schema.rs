//! Configuration record types.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Startup configuration for an Atrium server.
///
/// Mirrors the `http.json` configuration file:
///
/// ```json
/// { "port": "8080", "webRoot": "webroot" }
/// ```
///
/// Field names map case-sensitively; any other properties in the file are
/// ignored. Both fields are optional at the JSON level and decode to an
/// empty string when absent. The record carries the file's text verbatim
/// and leaves interpretation to its consumers.
///
/// # Example
///
/// ```
/// use atrium_config::ServerConfig;
///
/// let config = ServerConfig::from_json_str(r#"{"port":"8080","webRoot":"/var/www"}"#)?;
/// assert_eq!(config.port, "8080");
/// assert_eq!(config.web_root, "/var/www");
/// # Ok::<(), atrium_config::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port the server listens on. Kept as text; the bootstrap never
    /// parses it as a number.
    #[serde(default)]
    pub port: String,

    /// Root directory the server serves web files from.
    #[serde(default, rename = "webRoot")]
    pub web_root: String,
}

impl ServerConfig {
    /// Decode a configuration record from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the record as a compact JSON string.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode the record as a pretty-printed JSON string.
    pub fn to_json_string_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
