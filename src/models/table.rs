//! Column-oriented tables produced by the indicator and regime stages.

use chrono::NaiveDate;
use serde::Serialize;

use super::{MarketTrend, PriceSeries, VolatilityRegime};
use crate::indicators::{IndicatorColumn, InsufficientHistory};
use crate::regime::VolatilityBuckets;

/// A derived numeric column; `None` marks rows where the value is undefined
pub type Column = Vec<Option<f64>>;

/// A price series plus its six indicator columns, all of equal length
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorTable {
    pub(crate) series: PriceSeries,
    pub(crate) sma_50: Column,
    pub(crate) ema_20: Column,
    pub(crate) rsi: Column,
    pub(crate) macd: Column,
    pub(crate) bb_high: Column,
    pub(crate) bb_low: Column,
    pub(crate) warnings: Vec<InsufficientHistory>,
}

/// One row of an [`IndicatorTable`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorRow {
    pub date: NaiveDate,
    pub close: f64,
    pub sma_50: Option<f64>,
    pub ema_20: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub bb_high: Option<f64>,
    pub bb_low: Option<f64>,
}

impl IndicatorRow {
    /// Bollinger band width, defined when both bands are
    pub fn spread(&self) -> Option<f64> {
        Some(self.bb_high? - self.bb_low?)
    }
}

impl IndicatorTable {
    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn column(&self, column: IndicatorColumn) -> &[Option<f64>] {
        match column {
            IndicatorColumn::Sma50 => &self.sma_50,
            IndicatorColumn::Ema20 => &self.ema_20,
            IndicatorColumn::Rsi => &self.rsi,
            IndicatorColumn::Macd => &self.macd,
            IndicatorColumn::BbHigh => &self.bb_high,
            IndicatorColumn::BbLow => &self.bb_low,
        }
    }

    pub fn value(&self, column: IndicatorColumn, row: usize) -> Option<f64> {
        self.column(column).get(row).copied().flatten()
    }

    /// Columns that came out entirely undefined because the series was too short
    pub fn warnings(&self) -> &[InsufficientHistory] {
        &self.warnings
    }

    pub fn row(&self, index: usize) -> Option<IndicatorRow> {
        let bar = self.series.bars().get(index)?;
        Some(IndicatorRow {
            date: bar.date,
            close: bar.close,
            sma_50: self.sma_50[index],
            ema_20: self.ema_20[index],
            rsi: self.rsi[index],
            macd: self.macd[index],
            bb_high: self.bb_high[index],
            bb_low: self.bb_low[index],
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = IndicatorRow> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }
}

/// An [`IndicatorTable`] plus trend and volatility labels
#[derive(Debug, Clone, PartialEq)]
pub struct RegimeTable {
    pub(crate) indicators: IndicatorTable,
    pub(crate) market_trend: Vec<Option<MarketTrend>>,
    pub(crate) volatility_regime: Vec<Option<VolatilityRegime>>,
    pub(crate) buckets: Option<VolatilityBuckets>,
}

/// One output row, named and ordered as it is persisted
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegimeRow {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "Volume")]
    pub volume: f64,
    #[serde(rename = "SMA_50")]
    pub sma_50: Option<f64>,
    #[serde(rename = "EMA_20")]
    pub ema_20: Option<f64>,
    #[serde(rename = "RSI")]
    pub rsi: Option<f64>,
    #[serde(rename = "MACD")]
    pub macd: Option<f64>,
    #[serde(rename = "BB_High")]
    pub bb_high: Option<f64>,
    #[serde(rename = "BB_Low")]
    pub bb_low: Option<f64>,
    #[serde(rename = "Market_Trend")]
    pub market_trend: Option<MarketTrend>,
    #[serde(rename = "Volatility_Regime")]
    pub volatility_regime: Option<VolatilityRegime>,
}

impl RegimeTable {
    pub fn indicators(&self) -> &IndicatorTable {
        &self.indicators
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    pub fn market_trend(&self) -> &[Option<MarketTrend>] {
        &self.market_trend
    }

    pub fn volatility_regime(&self) -> &[Option<VolatilityRegime>] {
        &self.volatility_regime
    }

    /// Spread boundaries the volatility labels were cut with.
    ///
    /// They depend on the whole table, so appending history can move them
    /// and relabel earlier rows.
    pub fn buckets(&self) -> Option<&VolatilityBuckets> {
        self.buckets.as_ref()
    }

    pub fn row(&self, index: usize) -> Option<RegimeRow> {
        let bar = self.indicators.series.bars().get(index)?;
        let ind = self.indicators.row(index)?;
        Some(RegimeRow {
            date: bar.date,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            sma_50: ind.sma_50,
            ema_20: ind.ema_20,
            rsi: ind.rsi,
            macd: ind.macd,
            bb_high: ind.bb_high,
            bb_low: ind.bb_low,
            market_trend: self.market_trend[index],
            volatility_regime: self.volatility_regime[index],
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = RegimeRow> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }
}
