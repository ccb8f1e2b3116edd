//! Feature engineering for per-symbol OHLCV series.
//!
//! A raw [`PriceSeries`] flows through [`compute_indicators`] and then
//! [`classify_regimes`]; the resulting [`RegimeTable`] is persisted through a
//! [`SeriesStore`]. [`FeaturePipeline`] wires the three together per symbol.

pub mod common;
pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod regime;
pub mod store;

pub use error::{Error, Result, SeriesError};
pub use indicators::{compute_indicators, IndicatorColumn, InsufficientHistory};
pub use models::{IndicatorTable, MarketTrend, PriceBar, PriceSeries, RegimeTable, VolatilityRegime};
pub use pipeline::{BatchReport, FeaturePipeline, SymbolOutcome, SymbolReport};
pub use regime::classify_regimes;
pub use store::{CsvSeriesStore, MemorySeriesStore, SeriesStore};
