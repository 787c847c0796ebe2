use super::stats::Stats;
use crate::domain::backtest::types::PricePoint;
use serde::{Deserialize, Serialize};

/// Risk-adjusted performance of a normalized (start = 100) equity curve.
///
/// All values are rounded to 2 decimal places. A curve with fewer than two
/// points yields all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub total_return_pct: f64,
    pub sharpe_ratio: f64,
    pub sortino_ratio: f64,
    pub max_drawdown_pct: f64,
    pub calmar_ratio: f64,
    pub win_rate_pct: f64,
}

impl PerformanceMetrics {
    /// Metrics over the strategy channel of a sampled series.
    pub fn from_series(series: &[PricePoint]) -> Self {
        let values: Vec<f64> = series.iter().map(|p| p.strategy_index).collect();
        Self::from_values(&values)
    }

    /// Strategy-channel metrics with total return and Calmar measured at
    /// `final_value` rather than at the last sampled point.
    pub fn from_series_ending_at(series: &[PricePoint], final_value: f64) -> Self {
        let values: Vec<f64> = series.iter().map(|p| p.strategy_index).collect();
        Self::from_values_ending_at(&values, final_value)
    }

    /// Metrics over index values normalized to start at 100.
    pub fn from_values(values: &[f64]) -> Self {
        match values.last() {
            Some(&last) => Self::from_values_ending_at(values, last),
            None => Self::default(),
        }
    }

    /// Ratios come from the sampled `values`; total return and Calmar from
    /// `final_value`, which may lie past the last sample.
    pub fn from_values_ending_at(values: &[f64], final_value: f64) -> Self {
        if values.len() < 2 {
            return Self::default();
        }

        let returns = Stats::calculate_returns(values);
        let max_dd = Stats::max_drawdown(values);
        let total_return = final_value - 100.0;

        let calmar = if max_dd > 0.0 {
            (total_return / 100.0) / max_dd
        } else {
            0.0
        };

        let win_rate = if returns.is_empty() {
            0.0
        } else {
            let wins = returns.iter().filter(|r| **r > 0.0).count();
            wins as f64 / returns.len() as f64 * 100.0
        };

        Self {
            total_return_pct: Stats::round2(total_return),
            sharpe_ratio: Stats::round2(Stats::sharpe_ratio(&returns)),
            sortino_ratio: Stats::round2(Stats::sortino_ratio(&returns)),
            max_drawdown_pct: Stats::round2(max_dd * 100.0),
            calmar_ratio: Stats::round2(calmar),
            win_rate_pct: Stats::round2(win_rate),
        }
    }
}
