//! Bollinger Bands indicator

use crate::indicators::registry::{BOLLINGER_PERIOD, BOLLINGER_STD_DEV};
use crate::common::math;
use crate::models::Column;

/// Band columns, each as long as the input
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerColumns {
    pub upper: Column,
    pub middle: Column,
    pub lower: Column,
}

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
///
/// The standard deviation is the population one over the same window.
pub fn calculate_bollinger_bands(closes: &[f64], period: usize, std_dev: f64) -> BollingerColumns {
    let middle = math::sma_series(closes, period);
    let deviation = math::standard_deviation_series(closes, period);

    let band = |sign: f64| -> Column {
        middle
            .iter()
            .zip(deviation.iter())
            .map(|(m, sd)| Some((*m)? + sign * std_dev * (*sd)?))
            .collect()
    };
    let upper = band(1.0);
    let lower = band(-1.0);

    BollingerColumns {
        upper,
        middle,
        lower,
    }
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(closes: &[f64]) -> BollingerColumns {
    calculate_bollinger_bands(closes, BOLLINGER_PERIOD, BOLLINGER_STD_DEV)
}
