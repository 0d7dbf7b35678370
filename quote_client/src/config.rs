//! Client configuration.
//!
//! Values come from an optional TOML file; command-line flags override them.
//!
//! ```toml
//! storage_dir = ".quotes"
//! endpoint = "http://127.0.0.1:8080/posts"
//! sync_interval_secs = 30
//! request_timeout_secs = 10
//! push_new_quotes = true
//! ```
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use quote_common::net::{DEFAULT_ENDPOINT, DEFAULT_SYNC_INTERVAL_SECS};
use quote_common::{QuoteError, Result};
use serde::Deserialize;

/// Command-line values applied over the file settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replaces `storage_dir` when set.
    pub storage_dir: Option<PathBuf>,
    /// Replaces `endpoint` when set.
    pub endpoint: Option<String>,
    /// `--push` on `add`; can only switch pushing on.
    pub push_new_quotes: bool,
}

/// Settings of the quote client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Directory of the file-backed key-value store.
    pub storage_dir: PathBuf,
    /// Remote collection URL.
    pub endpoint: String,
    /// Seconds between scheduled polls.
    pub sync_interval_secs: u64,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Push newly authored quotes upstream.
    pub push_new_quotes: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            storage_dir: PathBuf::from(".quotes"),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            sync_interval_secs: DEFAULT_SYNC_INTERVAL_SECS,
            request_timeout_secs: 10,
            push_new_quotes: false,
        }
    }
}

impl ClientConfig {
    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: ClientConfig =
            toml::from_str(text).map_err(|e| QuoteError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| QuoteError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&text)
    }

    /// Reads `path` when given, otherwise starts from the defaults, then
    /// applies `overrides`.
    pub fn resolve(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(overrides))
    }

    /// Applies command-line values over these settings.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(dir) = overrides.storage_dir {
            self.storage_dir = dir;
        }
        if let Some(endpoint) = overrides.endpoint {
            self.endpoint = endpoint;
        }
        self.push_new_quotes |= overrides.push_new_quotes;
        self
    }

    /// Rejects zero durations.
    pub fn validate(&self) -> Result<()> {
        if self.sync_interval_secs == 0 {
            return Err(QuoteError::Config("sync_interval_secs must be positive".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(QuoteError::Config("request_timeout_secs must be positive".into()));
        }
        Ok(())
    }

    /// Interval between scheduled polls.
    pub fn sync_interval(&self) -> Duration {
        Duration::from_secs(self.sync_interval_secs)
    }

    /// Timeout of one remote request.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(ClientConfig::from_toml("").unwrap(), ClientConfig::default());
    }

    #[test]
    fn partial_document_overrides_given_keys() {
        let config = ClientConfig::from_toml(
            "endpoint = \"http://127.0.0.1:9000/posts\"\npush_new_quotes = true\n",
        )
        .unwrap();
        assert_eq!(config.endpoint, "http://127.0.0.1:9000/posts");
        assert!(config.push_new_quotes);
        assert_eq!(config.sync_interval_secs, DEFAULT_SYNC_INTERVAL_SECS);
    }

    #[test]
    fn rejects_unknown_keys_and_zero_interval() {
        assert!(matches!(
            ClientConfig::from_toml("interval = 5"),
            Err(QuoteError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::from_toml("sync_interval_secs = 0"),
            Err(QuoteError::Config(_))
        ));
    }

    #[test]
    fn reads_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("client.toml");
        fs::write(&path, "storage_dir = \"data\"\n").unwrap();
        let config = ClientConfig::from_file(&path).unwrap();
        assert_eq!(config.storage_dir, PathBuf::from("data"));
        assert!(ClientConfig::from_file(&tmp.path().join("missing.toml")).is_err());
    }

    #[test]
    fn flags_override_file_values() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("client.toml");
        fs::write(
            &path,
            "storage_dir = \"from-file\"\n\
             endpoint = \"http://file/posts\"\n\
             sync_interval_secs = 7\n",
        )
        .unwrap();

        let overrides = ConfigOverrides {
            storage_dir: Some(PathBuf::from("from-flag")),
            endpoint: None,
            push_new_quotes: false,
        };
        let config = ClientConfig::resolve(Some(&path), overrides).unwrap();
        assert_eq!(config.storage_dir, PathBuf::from("from-flag"));
        assert_eq!(config.endpoint, "http://file/posts");
        assert_eq!(config.sync_interval_secs, 7);
        assert!(!config.push_new_quotes);
    }

    #[test]
    fn resolve_without_file_uses_defaults() {
        let overrides = ConfigOverrides {
            endpoint: Some("http://flag/posts".into()),
            ..ConfigOverrides::default()
        };
        let config = ClientConfig::resolve(None, overrides).unwrap();
        assert_eq!(config.endpoint, "http://flag/posts");
        assert_eq!(config.storage_dir, ClientConfig::default().storage_dir);
    }

    #[test]
    fn push_flag_and_file_setting_combine() {
        let push_flag = ConfigOverrides {
            push_new_quotes: true,
            ..ConfigOverrides::default()
        };
        assert!(ClientConfig::default().with_overrides(push_flag).push_new_quotes);

        let from_file = ClientConfig::from_toml("push_new_quotes = true").unwrap();
        assert!(from_file.with_overrides(ConfigOverrides::default()).push_new_quotes);

        let neither = ClientConfig::default().with_overrides(ConfigOverrides::default());
        assert!(!neither.push_new_quotes);
    }
}
