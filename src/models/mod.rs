//! Shared data models passed between the pipeline stages.

pub mod regime;
pub mod series;
pub mod table;

pub use regime::{MarketTrend, VolatilityRegime};
pub use series::{PriceBar, PriceSeries};
pub use table::{Column, IndicatorRow, IndicatorTable, RegimeRow, RegimeTable};
