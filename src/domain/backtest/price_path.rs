use super::seeded_random::SeededRandom;
use super::types::PricePoint;
use crate::domain::performance::stats::Stats;
use chrono::{NaiveDate, TimeDelta};

/// Index level both curves start from.
pub const INITIAL_INDEX: f64 = 100.0;

/// Every n-th simulated day is sampled into the output series.
pub const SAMPLE_EVERY: u32 = 3;

/// Synthetic strategy/benchmark equity curves for one symbol/strategy pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticPath {
    pub series: Vec<PricePoint>,
    /// Running values after the last simulated day (unrounded, may be unsampled).
    pub final_strategy: f64,
    pub final_benchmark: f64,
}

/// Daily return model for one curve: `(draw - bias) * scale`.
#[derive(Debug, Clone, Copy)]
struct ReturnModel {
    seed_multiplier: f64,
    bias: f64,
    scale: f64,
}

impl ReturnModel {
    // Slight positive skew for the strategy, milder one for the benchmark.
    const STRATEGY: ReturnModel = ReturnModel {
        seed_multiplier: 1.0,
        bias: 0.48,
        scale: 0.025,
    };
    const BENCHMARK: ReturnModel = ReturnModel {
        seed_multiplier: 2.0,
        bias: 0.49,
        scale: 0.02,
    };

    fn daily_return(&self, base_seed: f64, day: u32) -> f64 {
        let draw = SeededRandom::draw(base_seed * self.seed_multiplier + f64::from(day));
        (draw - self.bias) * self.scale
    }
}

pub struct SyntheticPricePath;

impl SyntheticPricePath {
    /// Generate the path with dates counted back from `today`.
    ///
    /// Same `symbol`/`strategy`/`days` always yields the same index values.
    pub fn generate(symbol: &str, strategy: &str, days: u32, today: NaiveDate) -> SyntheticPath {
        let base_seed = SeededRandom::base_seed(symbol, strategy);
        let mut series = Vec::with_capacity(days.div_ceil(SAMPLE_EVERY) as usize);
        let mut strategy_value = INITIAL_INDEX;
        let mut benchmark_value = INITIAL_INDEX;

        for day in 0..days {
            strategy_value *= 1.0 + ReturnModel::STRATEGY.daily_return(base_seed, day);
            benchmark_value *= 1.0 + ReturnModel::BENCHMARK.daily_return(base_seed, day);

            if day % SAMPLE_EVERY == 0 {
                series.push(PricePoint {
                    date: short_date(today, days - day),
                    strategy_index: Stats::round2(strategy_value),
                    benchmark_index: Stats::round2(benchmark_value),
                });
            }
        }

        SyntheticPath {
            series,
            final_strategy: strategy_value,
            final_benchmark: benchmark_value,
        }
    }
}

/// `today - days_back`, formatted like "Jan 5".
fn short_date(today: NaiveDate, days_back: u32) -> String {
    let date = today
        .checked_sub_signed(TimeDelta::days(i64::from(days_back)))
        .unwrap_or(today);
    date.format("%b %-d").to_string()
}
