// crates/console-client/src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for the order console.
///
/// Read from an optional TOML file; any field left out keeps its default.
/// Command-line flags are applied on top by `main`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix of every REST endpoint.
    pub api_root: String,
    /// Sync-loop period for the orders and execution-log feeds.
    pub refresh_secs: u64,
    /// Per-request timeout handed to the HTTP client. Unset means the
    /// transport default (no client-side timeout).
    pub request_timeout_secs: Option<u64>,
    /// Where `--debug` logging goes.
    pub log_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_root: "http://localhost:8080/api".to_string(),
            refresh_secs: 10,
            request_timeout_secs: None,
            log_file: PathBuf::from("order-console.log"),
        }
    }
}

impl ClientConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: ClientConfig = toml::from_str(text)?;
        if config.refresh_secs == 0 {
            anyhow::bail!("refresh_secs must be at least 1");
        }
        Ok(config)
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
