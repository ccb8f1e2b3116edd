use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SeriesError;

/// One trading date of open/high/low/close/volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
            ("volume", self.volume),
        ]
    }
}

/// A validated, strictly date-ordered OHLCV series for one symbol.
///
/// The only way to build one is [`PriceSeries::new`], so holding a value
/// means the invariants hold: unique increasing dates, finite and
/// non-negative fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    pub fn new(bars: Vec<PriceBar>) -> Result<Self, SeriesError> {
        let mut previous: Option<NaiveDate> = None;
        for (row, bar) in bars.iter().enumerate() {
            for (field, value) in bar.fields() {
                if !value.is_finite() {
                    return Err(SeriesError::NonFinite { row, field });
                }
                if value < 0.0 {
                    return Err(SeriesError::Negative { row, field, value });
                }
            }
            if let Some(previous) = previous {
                if bar.date <= previous {
                    return Err(SeriesError::NonIncreasingDate {
                        row,
                        previous,
                        date: bar.date,
                    });
                }
            }
            previous = Some(bar.date);
        }
        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.bars.first().map(|b| b.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.bars.last().map(|b| b.date)
    }
}
