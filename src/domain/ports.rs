use crate::domain::backtest::types::{BacktestRequest, BacktestResult};
use anyhow::Result;
use async_trait::async_trait;

/// A service able to run a backtest remotely.
///
/// Any `Err` is treated by the runner as "remote unavailable".
#[async_trait]
pub trait BacktestService: Send + Sync {
    async fn run_backtest(&self, request: &BacktestRequest) -> Result<BacktestResult>;
}
