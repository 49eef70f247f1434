//! Verification run configuration.
//!
//! The binary takes no arguments and reads no config file; every run uses
//! these defaults. The structs exist so the fixed values are named, show up
//! in debug logs as JSON, and can be tightened in tests.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level localecheck configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub browser: BrowserConfig,

    /// Directory screenshots are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            browser: BrowserConfig::default(),
            output_dir: default_output_dir(),
        }
    }
}

/// The dev server under verification. localecheck does not start it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL; locale path segments are appended to this.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Total startup allowance before the run fails (default: 10000).
    #[serde(default = "default_startup_deadline")]
    pub startup_deadline_ms: u64,

    /// Interval between readiness probes (default: 500).
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            startup_deadline_ms: default_startup_deadline(),
            poll_interval_ms: default_poll_interval(),
        }
    }
}

/// Browser launch options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Path to Chrome/Chromium binary (auto-detected if omitted).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_path: Option<String>,

    /// Run in headless mode (default: true).
    #[serde(default = "default_true")]
    pub headless: bool,

    /// Per-locale heading visibility timeout in ms (default: 30000).
    #[serde(default = "default_heading_timeout")]
    pub heading_timeout_ms: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            chrome_path: None,
            headless: true,
            heading_timeout_ms: default_heading_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".into()
}

fn default_startup_deadline() -> u64 {
    10_000
}

fn default_poll_interval() -> u64 {
    500
}

fn default_heading_timeout() -> u64 {
    30_000
}

fn default_true() -> bool {
    true
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("jules-scratch/verification")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.base_url, "http://localhost:3000");
        assert_eq!(config.server.startup_deadline_ms, 10_000);
        assert_eq!(config.browser.heading_timeout_ms, 30_000);
        assert!(config.browser.headless);
        assert!(config.browser.chrome_path.is_none());
        assert_eq!(
            config.output_dir,
            PathBuf::from("jules-scratch/verification")
        );
    }

    #[test]
    fn test_deserialize_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.server.poll_interval_ms, 500);
        assert!(config.browser.headless);
    }

    #[test]
    fn test_serializes_without_chrome_path() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(!json.contains("chrome_path"));
    }
}
