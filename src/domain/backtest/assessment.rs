use super::types::BacktestResult;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SHARPE_TARGET: f64 = 1.5;
pub const MAX_DRAWDOWN_LIMIT_PCT: f64 = 15.0;

/// Traffic-light grade for a single metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    Good,
    Fair,
    Poor,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::Good => "good",
            Grade::Fair => "fair",
            Grade::Poor => "poor",
        };
        f.write_str(s)
    }
}

/// Per-metric grades plus the strategy-notes targets for one result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub total_return: Grade,
    pub sharpe: Grade,
    pub sortino: Grade,
    pub max_drawdown: Grade,
    pub calmar: Grade,
    pub win_rate: Grade,
    pub sharpe_target_met: bool,
    pub drawdown_within_limit: bool,
    pub beats_benchmark: bool,
}

impl Assessment {
    pub fn of(result: &BacktestResult) -> Self {
        Self {
            total_return: if result.is_profitable() {
                Grade::Good
            } else {
                Grade::Poor
            },
            sharpe: grade_sharpe(result.sharpe_ratio),
            sortino: if result.sortino_ratio > 2.0 {
                Grade::Good
            } else {
                Grade::Fair
            },
            max_drawdown: grade_drawdown(result.max_drawdown_pct),
            calmar: if result.calmar_ratio > 1.0 {
                Grade::Good
            } else {
                Grade::Fair
            },
            win_rate: if result.win_rate_pct > 55.0 {
                Grade::Good
            } else {
                Grade::Fair
            },
            sharpe_target_met: result.sharpe_ratio >= SHARPE_TARGET,
            drawdown_within_limit: result.max_drawdown_pct <= MAX_DRAWDOWN_LIMIT_PCT,
            beats_benchmark: result.beats_benchmark(),
        }
    }
}

fn grade_sharpe(sharpe: f64) -> Grade {
    if sharpe > 1.5 {
        Grade::Good
    } else if sharpe > 0.5 {
        Grade::Fair
    } else {
        Grade::Poor
    }
}

fn grade_drawdown(max_drawdown_pct: f64) -> Grade {
    if max_drawdown_pct < 10.0 {
        Grade::Good
    } else if max_drawdown_pct < 20.0 {
        Grade::Fair
    } else {
        Grade::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::backtest::types::PricePoint;

    fn result(sharpe: f64, max_dd: f64, last: (f64, f64)) -> BacktestResult {
        BacktestResult {
            symbol: "SPY".to_string(),
            strategy_id: "rsi_momentum".to_string(),
            total_return_pct: last.0 - 100.0,
            benchmark_return_pct: last.1 - 100.0,
            sharpe_ratio: sharpe,
            sortino_ratio: 2.5,
            max_drawdown_pct: max_dd,
            calmar_ratio: 0.8,
            win_rate_pct: 55.0,
            total_trades: 30,
            series: vec![PricePoint {
                date: "Mar 1".to_string(),
                strategy_index: last.0,
                benchmark_index: last.1,
            }],
        }
    }

    #[test]
    fn test_grades() {
        let a = Assessment::of(&result(1.6, 9.99, (112.0, 104.0)));
        assert_eq!(a.total_return, Grade::Good);
        assert_eq!(a.sharpe, Grade::Good);
        assert_eq!(a.sortino, Grade::Good);
        assert_eq!(a.max_drawdown, Grade::Good);
        assert_eq!(a.calmar, Grade::Fair);
        // 55 is not above 55
        assert_eq!(a.win_rate, Grade::Fair);
        assert!(a.sharpe_target_met);
        assert!(a.drawdown_within_limit);
        assert!(a.beats_benchmark);
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(grade_sharpe(1.5), Grade::Fair);
        assert_eq!(grade_sharpe(0.5), Grade::Poor);
        assert_eq!(grade_drawdown(10.0), Grade::Fair);
        assert_eq!(grade_drawdown(20.0), Grade::Poor);

        let a = Assessment::of(&result(1.5, 15.0, (95.0, 99.0)));
        assert!(a.sharpe_target_met);
        assert!(a.drawdown_within_limit);
        assert!(!a.beats_benchmark);
        assert_eq!(a.total_return, Grade::Poor);
    }

    #[test]
    fn test_empty_series_does_not_beat_benchmark() {
        let mut r = result(0.0, 0.0, (100.0, 100.0));
        r.series.clear();
        assert!(!Assessment::of(&r).beats_benchmark);
    }
}
