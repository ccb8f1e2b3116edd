//! Assembles the indicator columns for one series.

use super::momentum::{calculate_macd_default, calculate_rsi_default};
use super::registry::InsufficientHistory;
use super::trend::{calculate_ema_default, calculate_sma_default};
use super::volatility::calculate_bollinger_bands_default;
use crate::models::{IndicatorTable, PriceSeries};

/// Compute SMA_50, EMA_20, RSI, MACD and both Bollinger bands from close prices.
///
/// Never fails. Columns the series is too short for come back all `None`,
/// and an [`InsufficientHistory`] warning is attached to the table for each.
pub fn compute_indicators(series: PriceSeries) -> IndicatorTable {
    let closes = series.closes();
    let bands = calculate_bollinger_bands_default(&closes);
    let warnings = InsufficientHistory::for_length(series.len());

    IndicatorTable {
        sma_50: calculate_sma_default(&closes),
        ema_20: calculate_ema_default(&closes),
        rsi: calculate_rsi_default(&closes),
        macd: calculate_macd_default(&closes),
        bb_high: bands.upper,
        bb_low: bands.lower,
        warnings,
        series,
    }
}
