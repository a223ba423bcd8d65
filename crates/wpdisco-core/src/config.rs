//! Configuration management for wpdisco.
//!
//! Configuration is stored in TOML and layered:
//!
//! 1. **Built-in defaults**
//! 2. **Config file**: `config.toml` in the platform config directory, or an
//!    explicit path
//! 3. **Environment variables**: `WPDISCO_*` prefix
//!
//! ## Example Configuration File
//!
//! ```toml
//! [http]
//! timeout_secs = 10
//! user_agent = "my-crawler/1.0"
//! max_redirects = 3
//!
//! [discovery]
//! legacy = true
//! ```
//!
//! ## Loading
//!
//! ```rust,no_run
//! use wpdisco_core::{Config, ReqwestClient};
//!
//! let config = Config::load()?;
//! let client = ReqwestClient::from_config(&config.http)?;
//! # Ok::<(), wpdisco_core::Error>(())
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding [`HttpConfig::timeout_secs`].
pub const ENV_TIMEOUT_SECS: &str = "WPDISCO_TIMEOUT_SECS";
/// Environment variable overriding [`HttpConfig::user_agent`].
pub const ENV_USER_AGENT: &str = "WPDISCO_USER_AGENT";
/// Environment variable overriding [`DiscoveryConfig::legacy`].
pub const ENV_LEGACY: &str = "WPDISCO_LEGACY";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Settings passed through to the HTTP transport.
    pub http: HttpConfig,
    /// Discovery behavior.
    pub discovery: DiscoveryConfig,
}

/// HTTP transport settings.
///
/// The core imposes no timeouts or retries of its own; these values only
/// configure the [`ReqwestClient`](crate::ReqwestClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout in seconds. Must be greater than zero.
    pub timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Maximum number of redirects followed per request.
    pub max_redirects: usize,
}

impl HttpConfig {
    /// The request timeout as a [`Duration`].
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("wpdisco/", env!("CARGO_PKG_VERSION")).to_string(),
            max_redirects: 5,
        }
    }
}

/// Discovery behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Also accept the pre-4.4 `https://github.com/WP-API/WP-API` relation.
    pub legacy: bool,
}

impl Config {
    /// Load configuration from the default location, then apply environment
    /// overrides.
    ///
    /// A missing file is not an error: defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file exists but cannot be read or
    /// parsed, or if an environment override is invalid.
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Some(path) if path.exists() => Self::read_file(&path)?,
            _ => Self::default(),
        };
        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Load configuration from an explicit file, then apply environment
    /// overrides.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::read_file(path)?.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Path of the default config file (`<config dir>/config.toml`).
    ///
    /// Returns `None` when the platform config directory cannot be
    /// determined.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "outfitter", "wpdisco")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn read_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Apply `WPDISCO_*` overrides using the given variable lookup.
    ///
    /// Taking the lookup as a closure keeps this testable without touching
    /// the process environment.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.http.timeout_secs = raw.trim().parse().map_err(|_| {
                Error::Config(format!("{ENV_TIMEOUT_SECS} must be a positive integer, got '{raw}'"))
            })?;
        }
        if let Some(raw) = lookup(ENV_USER_AGENT) {
            self.http.user_agent = raw;
        }
        if let Some(raw) = lookup(ENV_LEGACY) {
            self.discovery.legacy = parse_bool(&raw).ok_or_else(|| {
                Error::Config(format!("{ENV_LEGACY} must be a boolean, got '{raw}'"))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.http.timeout_secs == 0 {
            return Err(Error::Config("http.timeout_secs must be greater than zero".into()));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(Error::Config("http.user_agent must not be empty".into()));
        }
        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::disallowed_macros,
    clippy::unnecessary_wraps
)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.http.timeout_secs, 30);
        assert_eq!(config.http.max_redirects, 5);
        assert!(config.http.user_agent.starts_with("wpdisco/"));
        assert!(!config.discovery.legacy);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_path_partial_file_keeps_defaults() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "[discovery]\nlegacy = true")?;

        let config = Config::read_file(file.path())?;

        assert!(config.discovery.legacy);
        assert_eq!(config.http, HttpConfig::default());
        Ok(())
    }

    #[test]
    fn test_from_path_full_file() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(
            file,
            "[http]\ntimeout_secs = 7\nuser_agent = \"probe/2\"\nmax_redirects = 1"
        )?;

        let config = Config::read_file(file.path())?;

        assert_eq!(config.http.timeout_secs, 7);
        assert_eq!(config.http.user_agent, "probe/2");
        assert_eq!(config.http.max_redirects, 1);
        assert_eq!(config.http.timeout(), Duration::from_secs(7));
        Ok(())
    }

    #[test]
    fn test_from_path_missing_file_is_config_error() {
        let err = Config::from_path(Path::new("/definitely/not/here/config.toml")).unwrap_err();
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn test_invalid_toml_is_config_error() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "[http\ntimeout_secs = ")?;

        let err = Config::read_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        Ok(())
    }

    #[test]
    fn test_zero_timeout_rejected() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "[http]\ntimeout_secs = 0")?;

        let err = Config::read_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
        Ok(())
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default()
            .with_env_overrides(env(&[
                (ENV_TIMEOUT_SECS, "12"),
                (ENV_USER_AGENT, "ci-bot/1"),
                (ENV_LEGACY, "yes"),
            ]))
            .unwrap();

        assert_eq!(config.http.timeout_secs, 12);
        assert_eq!(config.http.user_agent, "ci-bot/1");
        assert!(config.discovery.legacy);
    }

    #[test]
    fn test_env_overrides_absent_leave_config_unchanged() {
        let config = Config::default().with_env_overrides(env(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_env_invalid_timeout() {
        let err = Config::default()
            .with_env_overrides(env(&[(ENV_TIMEOUT_SECS, "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT_SECS));
    }

    #[test]
    fn test_env_invalid_legacy() {
        let err = Config::default()
            .with_env_overrides(env(&[(ENV_LEGACY, "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_LEGACY));
    }

    #[test]
    fn test_parse_bool() {
        for raw in ["1", "true", "TRUE", " yes ", "on"] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["0", "false", "No", "off", ""] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_bool("2"), None);
    }

    proptest! {
        #[test]
        fn test_config_timeout_roundtrip(timeout_secs in 1u64..=3600) {
            let config = Config {
                http: HttpConfig { timeout_secs, ..HttpConfig::default() },
                discovery: DiscoveryConfig::default(),
            };

            let serialized = toml::to_string_pretty(&config).unwrap();
            let deserialized: Config = toml::from_str(&serialized).unwrap();

            prop_assert_eq!(deserialized.http.timeout_secs, timeout_secs);
        }
    }
}
