//! Reading configuration files from disk.

use std::fs;
use std::path::Path;

use crate::{ConfigError, ServerConfig};

/// Read and decode a JSON configuration file.
///
/// The whole file is read as UTF-8 text and decoded into a
/// [`ServerConfig`] in a single step. There is no partial result: any
/// failure yields an error carrying the offending path and no record.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if the file is missing or unreadable and
/// [`ConfigError::Parse`] if its contents are not valid JSON.
///
/// # Example
///
/// ```no_run
/// use atrium_config::read_config_file;
///
/// # fn main() -> Result<(), atrium_config::ConfigError> {
/// let config = read_config_file("resources/http.json")?;
/// println!("port: {}", config.port);
/// # Ok(())
/// # }
/// ```
pub fn read_config_file(path: impl AsRef<Path>) -> Result<ServerConfig, ConfigError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;

    serde_json::from_str(&content).map_err(|e| ConfigError::parse_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_valid_file() {
        let file = config_file(r#"{"port":"8080","webRoot":"/var/www"}"#);
        let config = read_config_file(file.path()).unwrap();
        assert_eq!(config.port, "8080");
        assert_eq!(config.web_root, "/var/www");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_config_file("/nonexistent/http.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/http.json"));
    }

    #[test]
    fn test_read_malformed_file() {
        let file = config_file(r#"{"port":"8080","#);
        let err = read_config_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_read_empty_object() {
        let file = config_file("{}");
        let config = read_config_file(file.path()).unwrap();
        assert_eq!(config, ServerConfig::default());
    }
}
