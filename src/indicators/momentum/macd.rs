//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::registry::{MACD_FAST_PERIOD, MACD_SLOW_PERIOD};
use crate::common::math;
use crate::models::Column;

/// MACD = EMA(fast) - EMA(slow)
///
/// Both EMAs are SMA-seeded, so the line is defined from row `slow - 1`.
pub fn calculate_macd(closes: &[f64], fast_period: usize, slow_period: usize) -> Column {
    let fast = math::ema_series(closes, fast_period);
    let slow = math::ema_series(closes, slow_period);

    fast.iter()
        .zip(slow.iter())
        .map(|(f, s)| Some((*f)? - (*s)?))
        .collect()
}

/// Calculate MACD with default periods (12, 26)
pub fn calculate_macd_default(closes: &[f64]) -> Column {
    calculate_macd(closes, MACD_FAST_PERIOD, MACD_SLOW_PERIOD)
}
