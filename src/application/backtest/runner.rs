use super::simulator::LocalSimulator;
use crate::config::Config;
use crate::domain::backtest::types::{BacktestPeriod, BacktestRequest, BacktestResult};
use crate::domain::errors::BacktestError;
use crate::domain::ports::BacktestService;
use crate::infrastructure::remote_backtest::HttpBacktestService;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Where a backtest result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BacktestSource {
    Remote,
    LocalSimulation,
}

/// A result together with the path that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestRun {
    pub result: BacktestResult,
    pub source: BacktestSource,
}

/// Runs backtests against the remote service, degrading to the local
/// simulator on any remote failure. Always yields a usable result.
pub struct BacktestRunner {
    remote: Option<Arc<dyn BacktestService>>,
    fallback_delay: Duration,
}

impl BacktestRunner {
    pub fn new(remote: Arc<dyn BacktestService>, fallback_delay: Duration) -> Self {
        Self {
            remote: Some(remote),
            fallback_delay,
        }
    }

    /// Runner that never calls out and simulates immediately.
    pub fn local_only() -> Self {
        Self {
            remote: None,
            fallback_delay: Duration::ZERO,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        if !config.remote_enabled {
            info!("BacktestRunner: remote backtests disabled, using local simulation");
            return Self::local_only();
        }
        let service = HttpBacktestService::from_config(config);
        info!("BacktestRunner: remote endpoint {}", service.endpoint());
        Self::new(Arc::new(service), config.fallback_delay())
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Run a backtest for a period label (`30d`, `90d`, `180d`, `1y`, `2y`).
    pub async fn run(
        &self,
        symbol: &str,
        strategy: &str,
        period_label: &str,
    ) -> Result<BacktestResult, BacktestError> {
        let period: BacktestPeriod = period_label.parse()?;
        Ok(self.run_period(symbol, strategy, period).await)
    }

    pub async fn run_period(
        &self,
        symbol: &str,
        strategy: &str,
        period: BacktestPeriod,
    ) -> BacktestResult {
        let request = BacktestRequest::new(symbol, strategy, period.days());
        self.run_request(&request).await.result
    }

    pub async fn run_request(&self, request: &BacktestRequest) -> BacktestRun {
        let Some(remote) = &self.remote else {
            return Self::simulate(request);
        };

        match remote.run_backtest(request).await {
            Ok(result) => {
                info!(
                    "BacktestRunner: remote result for {} / {} ({} days)",
                    request.symbol, request.strategy, request.days
                );
                BacktestRun {
                    result,
                    source: BacktestSource::Remote,
                }
            }
            Err(e) => {
                warn!(
                    "BacktestRunner: remote unavailable ({:#}), using local simulation",
                    e
                );
                if !self.fallback_delay.is_zero() {
                    tokio::time::sleep(self.fallback_delay).await;
                }
                Self::simulate(request)
            }
        }
    }

    fn simulate(request: &BacktestRequest) -> BacktestRun {
        BacktestRun {
            result: LocalSimulator::simulate(request),
            source: BacktestSource::LocalSimulation,
        }
    }
}
