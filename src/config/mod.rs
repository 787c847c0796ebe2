//! Configuration module for fundsim.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Backend (remote endpoint, HTTP) and Backtest (fallback, reports).

mod backend_config;
mod backtest_config;

pub use backend_config::{BackendEnvConfig, DEFAULT_API_URL};
pub use backtest_config::BacktestEnvConfig;

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Backend
    pub api_url: String,
    pub remote_enabled: bool,
    pub http_timeout_secs: u64,
    pub http_connect_timeout_secs: u64,

    // Backtest
    pub fallback_delay_ms: u64,
    pub report_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::compose(BackendEnvConfig::default(), BacktestEnvConfig::default())
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::load(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn load(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend = BackendEnvConfig::load(&get).context("Failed to load backend config")?;
        let backtest = BacktestEnvConfig::load(&get).context("Failed to load backtest config")?;
        Ok(Self::compose(backend, backtest))
    }

    fn compose(backend: BackendEnvConfig, backtest: BacktestEnvConfig) -> Self {
        Self {
            api_url: backend.api_url,
            remote_enabled: backend.remote_enabled,
            http_timeout_secs: backend.http_timeout_secs,
            http_connect_timeout_secs: backend.http_connect_timeout_secs,
            fallback_delay_ms: backtest.fallback_delay_ms,
            report_dir: backtest.report_dir,
        }
    }

    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_delay_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn http_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.http_connect_timeout_secs)
    }
}

fn parse_u64(get: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> Result<u64> {
    get(key)
        .unwrap_or_else(|| default.to_string())
        .trim()
        .parse::<u64>()
        .context(format!("Failed to parse {}", key))
}

fn parse_bool(get: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    get(key)
        .unwrap_or_else(|| default.to_string())
        .trim()
        .to_lowercase()
        .parse::<bool>()
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::load(lookup(&[])).expect("Should parse with defaults");
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "http://localhost:8000");
        assert!(config.remote_enabled);
        assert_eq!(config.fallback_delay(), Duration::from_millis(800));
        assert_eq!(config.http_timeout(), Duration::from_secs(30));
        assert_eq!(config.http_connect_timeout(), Duration::from_secs(10));
        assert_eq!(config.report_dir, "backtest_results");
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::load(lookup(&[
            ("FUNDSIM_API_URL", "https://fund.example.com/"),
            ("FUNDSIM_REMOTE_ENABLED", "FALSE"),
            ("FUNDSIM_FALLBACK_DELAY_MS", "0"),
            ("FUNDSIM_HTTP_TIMEOUT_SECS", " 5 "),
            ("FUNDSIM_REPORT_DIR", "/tmp/reports"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://fund.example.com");
        assert!(!config.remote_enabled);
        assert_eq!(config.fallback_delay_ms, 0);
        assert_eq!(config.http_timeout_secs, 5);
        assert_eq!(config.http_connect_timeout_secs, 10);
        assert_eq!(config.report_dir, "/tmp/reports");
    }

    #[test]
    fn test_invalid_number_is_an_error() {
        let err = Config::load(lookup(&[("FUNDSIM_FALLBACK_DELAY_MS", "soon")])).unwrap_err();
        assert!(format!("{:#}", err).contains("FUNDSIM_FALLBACK_DELAY_MS"));
    }

    #[test]
    fn test_invalid_bool_falls_back_to_default() {
        let config = Config::load(lookup(&[("FUNDSIM_REMOTE_ENABLED", "maybe")])).unwrap();
        assert!(config.remote_enabled);
    }

    #[test]
    fn test_blank_url_uses_default() {
        let config = Config::load(lookup(&[("FUNDSIM_API_URL", "  ")])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
