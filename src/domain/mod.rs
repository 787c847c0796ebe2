// Backtest simulation domain
pub mod backtest;

// Performance tracking domain
pub mod performance;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
