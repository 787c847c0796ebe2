pub mod reporting;
pub mod runner;
pub mod simulator;

pub use reporting::{BacktestReport, BacktestReporter};
pub use runner::{BacktestRun, BacktestRunner, BacktestSource};
pub use simulator::LocalSimulator;
