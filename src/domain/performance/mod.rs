// Performance tracking domain
pub mod metrics;
pub mod stats;
