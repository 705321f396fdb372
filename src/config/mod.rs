//! Configuration management.
//!
//! Defaults are compiled in as constants. A [`ClientConfig`] can override the
//! origins and the identifying user agent. Settings are read from a TOML file
//! (see [`ConfigFile`]) and/or `OLIB_*` environment variables, where a double
//! underscore separates the section from the key (`OLIB_CLIENT__BASE_URL`).

mod file_config;

pub use file_config::{ConfigFile, ConfigFileError, LoggingConfig};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of results per search page
pub const DEFAULT_LIMIT: u32 = 100;
/// Default search offset
pub const DEFAULT_OFFSET: u32 = 0;
/// Smallest accepted search page
pub const MIN_LIMIT: u32 = 1;
/// Largest accepted search page
pub const MAX_LIMIT: u32 = 1000;

/// Identifying client header sent with every request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Origin of the record and search endpoints
pub const BASE_URL: &str = "https://openlibrary.org";
/// Origin of the cover image service
pub const COVERS_BASE_URL: &str = "https://covers.openlibrary.org";
/// Root of the API documentation
pub const DOCS_BASE_URL: &str = "https://openlibrary.org/dev/docs/api";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Origin for record and search requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Origin used when building cover URLs
    #[serde(default = "default_covers_base_url")]
    pub covers_base_url: String,

    /// Value of the `User-Agent` header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            covers_base_url: default_covers_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Override the API origin (useful for tests against a local server)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the covers origin
    pub fn covers_base_url(mut self, url: impl Into<String>) -> Self {
        self.covers_base_url = url.into();
        self
    }

    /// Override the user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn default_base_url() -> String {
    BASE_URL.to_string()
}

fn default_covers_base_url() -> String {
    COVERS_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    USER_AGENT.to_string()
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("OLIB")
        .prefix_separator("_")
        .separator("__")
}

/// Load configuration from a file, with `OLIB_*` environment overrides
pub fn load_config(path: &Path) -> Result<ConfigFile, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(environment())
        .build()?;

    settings.try_deserialize()
}

/// Configuration from `OLIB_*` environment variables and defaults
pub fn get_config() -> Result<ConfigFile, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(environment())
        .build()?;

    settings.try_deserialize()
}

/// Find a configuration file in the default locations.
///
/// Looks for `olib.toml` in the working directory, then `config.toml` under the
/// platform config directory (`~/.config/olib/` on Linux).
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("olib.toml");
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("olib").join("config.toml"))
        .filter(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://openlibrary.org");
        assert_eq!(config.covers_base_url, "https://covers.openlibrary.org");
        assert!(config.user_agent.starts_with("olib/"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::default()
            .base_url("http://127.0.0.1:8080")
            .user_agent("test-agent");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.covers_base_url, COVERS_BASE_URL);
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("olib.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"[client]\ncovers_base_url = \"http://covers.local\"\n")
            .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.client.covers_base_url, "http://covers.local");
        assert_eq!(config.client.base_url, BASE_URL);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(Path::new("/nonexistent/olib.toml"));
        assert!(result.is_err());
    }
}
