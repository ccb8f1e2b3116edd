//! EMA (Exponential Moving Average) indicator

use crate::indicators::registry::EMA_PERIOD;
use crate::common::math;
use crate::models::Column;

/// EMA with α = 2/(period+1), seeded by the SMA of the first `period` closes
pub fn calculate_ema(closes: &[f64], period: usize) -> Column {
    math::ema_series(closes, period)
}

/// EMA over the default 20-row window
pub fn calculate_ema_default(closes: &[f64]) -> Column {
    calculate_ema(closes, EMA_PERIOD)
}
