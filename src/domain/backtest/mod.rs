// Backtest simulation domain
pub mod assessment;
pub mod catalog;
pub mod price_path;
pub mod seeded_random;
pub mod types;

pub use price_path::{SyntheticPath, SyntheticPricePath};
pub use seeded_random::SeededRandom;
pub use types::{BacktestPeriod, BacktestRequest, BacktestResult, PricePoint};
