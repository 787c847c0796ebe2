use crate::domain::errors::BacktestError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One sampled step of the strategy and benchmark indices (both start at 100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    #[serde(rename = "strategy")]
    pub strategy_index: f64,
    #[serde(rename = "benchmark")]
    pub benchmark_index: f64,
}

/// Outcome of a backtest run, identical in shape whether it came from the
/// remote service or the local simulator.
///
/// Field names on the wire follow the backend's JSON (`strategy`, `chart_data`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestResult {
    pub symbol: String,
    #[serde(rename = "strategy")]
    pub strategy_id: String,
    pub total_return_pct: f64,
    #[serde(default)]
    pub benchmark_return_pct: f64,
    pub sharpe_ratio: f64,
    pub sortino_ratio: f64,
    pub max_drawdown_pct: f64,
    pub calmar_ratio: f64,
    pub win_rate_pct: f64,
    pub total_trades: u32,
    #[serde(rename = "chart_data")]
    pub series: Vec<PricePoint>,
}

impl BacktestResult {
    pub fn is_profitable(&self) -> bool {
        self.total_return_pct > 0.0
    }

    /// True when the last sampled strategy index ends above the benchmark.
    /// An empty series compares 100 against 100.
    pub fn beats_benchmark(&self) -> bool {
        let (strategy, benchmark) = self
            .series
            .last()
            .map(|p| (p.strategy_index, p.benchmark_index))
            .unwrap_or((100.0, 100.0));
        strategy > benchmark
    }
}

/// Body of `POST /api/trading/backtest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacktestRequest {
    pub symbol: String,
    pub strategy: String,
    pub days: u32,
}

impl BacktestRequest {
    pub fn new(symbol: impl Into<String>, strategy: impl Into<String>, days: u32) -> Self {
        Self {
            symbol: symbol.into(),
            strategy: strategy.into(),
            days,
        }
    }

    /// Placeholder trade count reported by simulated runs.
    pub fn total_trades(&self) -> u32 {
        self.days / 3
    }
}

/// Lookback window selectable for a backtest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BacktestPeriod {
    #[serde(rename = "30d")]
    Days30,
    #[default]
    #[serde(rename = "90d")]
    Days90,
    #[serde(rename = "180d")]
    Days180,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
}

impl BacktestPeriod {
    pub const ALL: [BacktestPeriod; 5] = [
        BacktestPeriod::Days30,
        BacktestPeriod::Days90,
        BacktestPeriod::Days180,
        BacktestPeriod::OneYear,
        BacktestPeriod::TwoYears,
    ];

    pub fn days(&self) -> u32 {
        match self {
            BacktestPeriod::Days30 => 30,
            BacktestPeriod::Days90 => 90,
            BacktestPeriod::Days180 => 180,
            BacktestPeriod::OneYear => 365,
            BacktestPeriod::TwoYears => 730,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BacktestPeriod::Days30 => "30d",
            BacktestPeriod::Days90 => "90d",
            BacktestPeriod::Days180 => "180d",
            BacktestPeriod::OneYear => "1y",
            BacktestPeriod::TwoYears => "2y",
        }
    }
}

impl fmt::Display for BacktestPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BacktestPeriod {
    type Err = BacktestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| BacktestError::InvalidPeriod {
                label: s.to_string(),
            })
    }
}
