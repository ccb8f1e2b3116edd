//! SMA (Simple Moving Average) indicator

use crate::indicators::registry::SMA_PERIOD;
use crate::common::math;
use crate::models::Column;

/// Trailing SMA of `closes`, undefined for the first `period - 1` rows
pub fn calculate_sma(closes: &[f64], period: usize) -> Column {
    math::sma_series(closes, period)
}

/// SMA over the default 50-row window
pub fn calculate_sma_default(closes: &[f64]) -> Column {
    calculate_sma(closes, SMA_PERIOD)
}
