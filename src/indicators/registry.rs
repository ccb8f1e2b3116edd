//! Catalogue of the derived indicator columns

use serde::Serialize;
use std::fmt;

/// Indicator category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IndicatorCategory {
    Trend,
    Momentum,
    Volatility,
}

/// The six columns appended by [`compute_indicators`](super::compute_indicators)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IndicatorColumn {
    Sma50,
    Ema20,
    Rsi,
    Macd,
    BbHigh,
    BbLow,
}

pub const SMA_PERIOD: usize = 50;
pub const EMA_PERIOD: usize = 20;
pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST_PERIOD: usize = 12;
pub const MACD_SLOW_PERIOD: usize = 26;
pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_STD_DEV: f64 = 2.0;

impl IndicatorColumn {
    /// All columns in output order
    pub const ALL: [IndicatorColumn; 6] = [
        IndicatorColumn::Sma50,
        IndicatorColumn::Ema20,
        IndicatorColumn::Rsi,
        IndicatorColumn::Macd,
        IndicatorColumn::BbHigh,
        IndicatorColumn::BbLow,
    ];

    /// Column header as persisted
    pub fn name(self) -> &'static str {
        match self {
            IndicatorColumn::Sma50 => "SMA_50",
            IndicatorColumn::Ema20 => "EMA_20",
            IndicatorColumn::Rsi => "RSI",
            IndicatorColumn::Macd => "MACD",
            IndicatorColumn::BbHigh => "BB_High",
            IndicatorColumn::BbLow => "BB_Low",
        }
    }

    pub fn category(self) -> IndicatorCategory {
        match self {
            IndicatorColumn::Sma50 | IndicatorColumn::Ema20 | IndicatorColumn::Macd => {
                IndicatorCategory::Trend
            }
            IndicatorColumn::Rsi => IndicatorCategory::Momentum,
            IndicatorColumn::BbHigh | IndicatorColumn::BbLow => IndicatorCategory::Volatility,
        }
    }

    /// Dominant window length
    pub fn window(self) -> usize {
        match self {
            IndicatorColumn::Sma50 => SMA_PERIOD,
            IndicatorColumn::Ema20 => EMA_PERIOD,
            IndicatorColumn::Rsi => RSI_PERIOD,
            IndicatorColumn::Macd => MACD_SLOW_PERIOD,
            IndicatorColumn::BbHigh | IndicatorColumn::BbLow => BOLLINGER_PERIOD,
        }
    }

    /// Number of leading rows left undefined.
    ///
    /// RSI needs one extra row because it works on close-to-close changes.
    pub fn warmup(self) -> usize {
        match self {
            IndicatorColumn::Rsi => RSI_PERIOD,
            other => other.window() - 1,
        }
    }

    /// Shortest series with at least one defined value in this column
    pub fn min_rows(self) -> usize {
        self.warmup() + 1
    }
}

impl fmt::Display for IndicatorColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Non-fatal: the series was too short for a column to have any defined value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsufficientHistory {
    pub column: IndicatorColumn,
    pub required: usize,
    pub available: usize,
}

impl InsufficientHistory {
    /// Warnings for every column that `rows` rows cannot fill
    pub fn for_length(rows: usize) -> Vec<InsufficientHistory> {
        IndicatorColumn::ALL
            .iter()
            .filter(|c| rows < c.min_rows())
            .map(|&column| InsufficientHistory {
                column,
                required: column.min_rows(),
                available: rows,
            })
            .collect()
    }
}

impl fmt::Display for InsufficientHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} needs {} rows, series has {}",
            self.column, self.required, self.available
        )
    }
}
