//! Backtest runner configuration parsing from environment variables.

use super::parse_u64;
use anyhow::Result;

/// Backtest environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BacktestEnvConfig {
    /// Pause before serving a locally simulated result after a remote failure.
    pub fallback_delay_ms: u64,
    pub report_dir: String,
}

impl Default for BacktestEnvConfig {
    fn default() -> Self {
        Self {
            fallback_delay_ms: 800,
            report_dir: "backtest_results".to_string(),
        }
    }
}

impl BacktestEnvConfig {
    pub fn load(get: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            fallback_delay_ms: parse_u64(
                get,
                "FUNDSIM_FALLBACK_DELAY_MS",
                defaults.fallback_delay_ms,
            )?,
            report_dir: get("FUNDSIM_REPORT_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .unwrap_or(defaults.report_dir),
        })
    }
}
