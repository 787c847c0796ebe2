use thiserror::Error;

/// Errors surfaced to callers of the backtest runner.
///
/// Remote failures never appear here: they are absorbed by the local fallback.
#[derive(Debug, Error)]
pub enum BacktestError {
    #[error("Invalid backtest period: {label:?} (expected one of 30d, 90d, 180d, 1y, 2y)")]
    InvalidPeriod { label: String },
}
