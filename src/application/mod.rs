// Backtest orchestration, local simulation and reporting
pub mod backtest;
