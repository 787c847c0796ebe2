use crate::domain::backtest::price_path::{INITIAL_INDEX, SyntheticPricePath};
use crate::domain::backtest::types::{BacktestRequest, BacktestResult};
use crate::domain::performance::metrics::PerformanceMetrics;
use crate::domain::performance::stats::Stats;
use chrono::{Local, NaiveDate};
use tracing::debug;

/// Client-side backtest used when the remote service cannot answer.
///
/// Produces a synthetic, deterministic equity curve and derives the same
/// metrics the backend reports.
pub struct LocalSimulator;

impl LocalSimulator {
    pub fn simulate(request: &BacktestRequest) -> BacktestResult {
        Self::simulate_at(request, Local::now().date_naive())
    }

    /// Same as [`LocalSimulator::simulate`] with chart dates anchored at `today`.
    pub fn simulate_at(request: &BacktestRequest, today: NaiveDate) -> BacktestResult {
        let path =
            SyntheticPricePath::generate(&request.symbol, &request.strategy, request.days, today);
        // Returns are measured at the end of the period, which can fall between samples
        let metrics = PerformanceMetrics::from_series_ending_at(&path.series, path.final_strategy);
        let benchmark_return_pct = Stats::round2(path.final_benchmark - INITIAL_INDEX);

        debug!(
            "LocalSimulator: {} / {} over {} days -> {} points, return {:.2}%",
            request.symbol,
            request.strategy,
            request.days,
            path.series.len(),
            metrics.total_return_pct
        );

        BacktestResult {
            symbol: request.symbol.clone(),
            strategy_id: request.strategy.clone(),
            total_return_pct: metrics.total_return_pct,
            benchmark_return_pct,
            sharpe_ratio: metrics.sharpe_ratio,
            sortino_ratio: metrics.sortino_ratio,
            max_drawdown_pct: metrics.max_drawdown_pct,
            calmar_ratio: metrics.calmar_ratio,
            win_rate_pct: metrics.win_rate_pct,
            total_trades: request.total_trades(),
            series: path.series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn test_simulation_echoes_request() {
        let request = BacktestRequest::new("AAPL", "buy_hold", 30);
        let result = LocalSimulator::simulate_at(&request, anchor());

        assert_eq!(result.symbol, "AAPL");
        assert_eq!(result.strategy_id, "buy_hold");
        assert_eq!(result.total_trades, 10);
        assert_eq!(result.series.len(), 10);
    }

    #[test]
    fn test_simulation_metrics_match_series() {
        let request = BacktestRequest::new("SPY", "rsi_momentum", 365);
        let result = LocalSimulator::simulate_at(&request, anchor());
        let metrics = PerformanceMetrics::from_series(&result.series);

        assert_eq!(result.sharpe_ratio, metrics.sharpe_ratio);
        assert_eq!(result.sortino_ratio, metrics.sortino_ratio);
        assert_eq!(result.max_drawdown_pct, metrics.max_drawdown_pct);
        assert_eq!(result.win_rate_pct, metrics.win_rate_pct);
        assert!(result.max_drawdown_pct >= 0.0);
        assert!((0.0..=100.0).contains(&result.win_rate_pct));
        assert!(result.sharpe_ratio.is_finite());
        assert!(result.sortino_ratio.is_finite());
        assert!(result.calmar_ratio.is_finite());
    }

    #[test]
    fn test_returns_measured_at_period_end() {
        // 30 days: the last sample is day 27, so days 28 and 29 only show in the final value
        let request = BacktestRequest::new("AAPL", "buy_hold", 30);
        let result = LocalSimulator::simulate_at(&request, anchor());
        let path = SyntheticPricePath::generate("AAPL", "buy_hold", 30, anchor());

        assert_eq!(
            result.total_return_pct,
            Stats::round2(path.final_strategy - 100.0)
        );
        assert_eq!(
            result.benchmark_return_pct,
            Stats::round2(path.final_benchmark - 100.0)
        );

        let max_dd = Stats::max_drawdown(
            &path.series.iter().map(|p| p.strategy_index).collect::<Vec<_>>(),
        );
        let expected_calmar = if max_dd > 0.0 {
            Stats::round2((path.final_strategy - 100.0) / 100.0 / max_dd)
        } else {
            0.0
        };
        assert_eq!(result.calmar_ratio, expected_calmar);
    }

    #[test]
    fn test_sample_aligned_period_matches_last_point() {
        // 730 % 3 == 1: the final simulated day is also the last sample
        let request = BacktestRequest::new("NVDA", "quant_king", 730);
        let result = LocalSimulator::simulate_at(&request, anchor());
        let last = result.series.last().unwrap();
        assert_eq!(result.total_return_pct, Stats::round2(last.strategy_index - 100.0));
    }

    #[test]
    fn test_simulation_is_reproducible() {
        let request = BacktestRequest::new("ETH-USD", "quant_king", 180);
        assert_eq!(
            LocalSimulator::simulate_at(&request, anchor()),
            LocalSimulator::simulate_at(&request, anchor())
        );
    }

    #[test]
    fn test_zero_days_yields_zero_metrics() {
        let request = BacktestRequest::new("TLT", "mean_reversion", 0);
        let result = LocalSimulator::simulate_at(&request, anchor());

        assert!(result.series.is_empty());
        assert_eq!(result.total_trades, 0);
        assert_eq!(result.total_return_pct, 0.0);
        assert_eq!(result.sharpe_ratio, 0.0);
        assert_eq!(result.max_drawdown_pct, 0.0);
        assert_eq!(result.benchmark_return_pct, 0.0);
    }
}
