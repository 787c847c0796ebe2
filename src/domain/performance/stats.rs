/// Trading days per year used to annualize daily ratios.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Shared statistics utilities for financial calculations.
pub struct Stats;

impl Stats {
    /// Period-over-period fractional returns. Non-positive previous values are skipped.
    pub fn calculate_returns(prices: &[f64]) -> Vec<f64> {
        prices
            .windows(2)
            .filter(|w| w[0] > 0.0)
            .map(|w| (w[1] - w[0]) / w[0])
            .collect()
    }

    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Population standard deviation (divides by n).
    pub fn population_std_dev(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let mean = Self::mean(values);
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        variance.sqrt()
    }

    /// Root-mean-square of the negative returns; zero when none are negative.
    pub fn downside_deviation(returns: &[f64]) -> f64 {
        let negatives: Vec<f64> = returns.iter().copied().filter(|r| *r < 0.0).collect();
        if negatives.is_empty() {
            return 0.0;
        }
        (negatives.iter().map(|r| r * r).sum::<f64>() / negatives.len() as f64).sqrt()
    }

    /// Annualized Sharpe ratio (no risk-free rate). Zero when volatility is zero.
    pub fn sharpe_ratio(returns: &[f64]) -> f64 {
        let std_dev = Self::population_std_dev(returns);
        if std_dev > 0.0 {
            Self::mean(returns) / std_dev * TRADING_DAYS_PER_YEAR.sqrt()
        } else {
            0.0
        }
    }

    /// Annualized Sortino ratio. Zero when there is no downside.
    pub fn sortino_ratio(returns: &[f64]) -> f64 {
        let downside = Self::downside_deviation(returns);
        if downside > 0.0 {
            Self::mean(returns) / downside * TRADING_DAYS_PER_YEAR.sqrt()
        } else {
            0.0
        }
    }

    /// Largest peak-to-trough decline as a fraction of the peak.
    ///
    /// The running peak starts at the first value.
    pub fn max_drawdown(values: &[f64]) -> f64 {
        let Some(&first) = values.first() else {
            return 0.0;
        };

        let mut peak = first;
        let mut max_dd = 0.0;
        for &v in values {
            if v > peak {
                peak = v;
            }
            if peak > 0.0 {
                let dd = (peak - v) / peak;
                if dd > max_dd {
                    max_dd = dd;
                }
            }
        }
        max_dd
    }

    /// Round half away from zero to 2 decimal places.
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_returns() {
        let returns = Stats::calculate_returns(&[100.0, 110.0, 99.0]);
        assert_eq!(returns.len(), 2);
        assert!((returns[0] - 0.1).abs() < 1e-12);
        assert!((returns[1] + 0.1).abs() < 1e-12);

        assert!(Stats::calculate_returns(&[100.0]).is_empty());
        assert!(Stats::calculate_returns(&[]).is_empty());
    }

    #[test]
    fn test_population_std_dev() {
        // mean 5, squared deviations sum to 32 over 8 values
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((Stats::population_std_dev(&values) - 2.0).abs() < 1e-12);
        assert_eq!(Stats::population_std_dev(&[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(Stats::population_std_dev(&[]), 0.0);
    }

    #[test]
    fn test_sharpe_ratio() {
        let returns = [0.01, 0.02, 0.01, 0.02];
        assert!(Stats::sharpe_ratio(&returns) > 0.0);

        let flat = [0.0, 0.0, 0.0];
        assert_eq!(Stats::sharpe_ratio(&flat), 0.0);
    }

    #[test]
    fn test_downside_deviation() {
        let returns = [0.02, -0.03, 0.01, -0.04];
        // sqrt((0.0009 + 0.0016) / 2)
        let expected = (0.00125_f64).sqrt();
        assert!((Stats::downside_deviation(&returns) - expected).abs() < 1e-12);
        assert_eq!(Stats::downside_deviation(&[0.01, 0.02]), 0.0);
        assert_eq!(Stats::sortino_ratio(&[0.01, 0.02]), 0.0);
    }

    #[test]
    fn test_max_drawdown() {
        assert!((Stats::max_drawdown(&[100.0, 120.0, 90.0, 130.0]) - 0.25).abs() < 1e-12);
        assert_eq!(Stats::max_drawdown(&[100.0, 101.0, 102.0]), 0.0);
        assert_eq!(Stats::max_drawdown(&[]), 0.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(Stats::round2(1.234), 1.23);
        assert_eq!(Stats::round2(-1.236), -1.24);
        assert_eq!(Stats::round2(15.000000000000002), 15.0);
        assert_eq!(Stats::round2(0.125), 0.13);
    }
}
