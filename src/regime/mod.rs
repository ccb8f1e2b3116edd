//! Regime classifier: categorical labels derived from indicator columns.

pub mod classifier;
pub mod trend;
pub mod volatility;

pub use classifier::classify_regimes;
pub use trend::market_trend;
pub use volatility::VolatilityBuckets;
