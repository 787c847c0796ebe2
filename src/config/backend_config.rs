//! Backend configuration parsing from environment variables.
//!
//! This module handles the remote backtest endpoint and HTTP client settings.

use super::{parse_bool, parse_u64};
use anyhow::Result;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Backend environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendEnvConfig {
    pub api_url: String,
    pub remote_enabled: bool,
    pub http_timeout_secs: u64,
    pub http_connect_timeout_secs: u64,
}

impl Default for BackendEnvConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            remote_enabled: true,
            http_timeout_secs: 30,
            http_connect_timeout_secs: 10,
        }
    }
}

impl BackendEnvConfig {
    pub fn load(get: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let api_url = get("FUNDSIM_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_url);

        Ok(Self {
            api_url,
            remote_enabled: parse_bool(get, "FUNDSIM_REMOTE_ENABLED", defaults.remote_enabled),
            http_timeout_secs: parse_u64(
                get,
                "FUNDSIM_HTTP_TIMEOUT_SECS",
                defaults.http_timeout_secs,
            )?,
            http_connect_timeout_secs: parse_u64(
                get,
                "FUNDSIM_HTTP_CONNECT_TIMEOUT_SECS",
                defaults.http_connect_timeout_secs,
            )?,
        })
    }
}
