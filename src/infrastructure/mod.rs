pub mod core;
pub mod remote_backtest;

pub use remote_backtest::HttpBacktestService;
