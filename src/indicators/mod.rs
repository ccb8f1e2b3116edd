//! Indicator engine: trend, momentum and volatility columns over close prices.

pub mod engine;
pub mod registry;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use engine::compute_indicators;
pub use registry::*;
