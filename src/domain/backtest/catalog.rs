//! Tickers and strategy profiles offered for backtesting.
//!
//! The runner accepts any identifiers; this list only drives the CLI defaults
//! and display labels.

/// A named strategy profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyProfile {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SYMBOLS: [&str; 11] = [
    "SPY", "QQQ", "AAPL", "NVDA", "TSLA", "MSFT", "GOOGL", "BTC-USD", "ETH-USD", "GLD", "TLT",
];

pub const STRATEGIES: [StrategyProfile; 5] = [
    StrategyProfile {
        id: "rsi_momentum",
        label: "RSI + Momentum",
    },
    StrategyProfile {
        id: "quant_king",
        label: "Quant King (Full)",
    },
    StrategyProfile {
        id: "mean_reversion",
        label: "Mean Reversion",
    },
    StrategyProfile {
        id: "trend_follow",
        label: "Trend Following",
    },
    StrategyProfile {
        id: "buy_hold",
        label: "Buy & Hold (Baseline)",
    },
];

pub const DEFAULT_SYMBOL: &str = "SPY";
pub const DEFAULT_STRATEGY: &str = "rsi_momentum";

/// Display label for a strategy id, or the id itself when unknown.
pub fn strategy_label(id: &str) -> &str {
    STRATEGIES
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.label)
        .unwrap_or(id)
}

pub fn is_known_symbol(symbol: &str) -> bool {
    SYMBOLS.contains(&symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_label_lookup() {
        assert_eq!(strategy_label("quant_king"), "Quant King (Full)");
        assert_eq!(strategy_label("buy_hold"), "Buy & Hold (Baseline)");
        assert_eq!(strategy_label("pairs_trading"), "pairs_trading");
    }

    #[test]
    fn test_defaults_are_in_catalog() {
        assert!(is_known_symbol(DEFAULT_SYMBOL));
        assert!(STRATEGIES.iter().any(|s| s.id == DEFAULT_STRATEGY));
        assert!(!is_known_symbol("DOGE"));
    }
}
