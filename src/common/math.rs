//! Windowed statistics over close prices.
//!
//! The scalar helpers look at the trailing `period` values of a slice; the
//! `*_series` variants apply them causally at every row and leave the
//! warm-up rows as `None`.

/// Neumaier-compensated sum
pub fn compensated_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for v in values {
        let t = sum + v;
        if sum.abs() >= v.abs() {
            compensation += (sum - t) + v;
        } else {
            compensation += (v - t) + sum;
        }
        sum = t;
    }
    sum + compensation
}

fn trailing(values: &[f64], period: usize) -> Option<&[f64]> {
    if period == 0 || values.len() < period {
        return None;
    }
    Some(&values[values.len() - period..])
}

// A flat window is its own value; rounding must not pull it off.
fn flat_value(window: &[f64]) -> Option<f64> {
    let first = *window.first()?;
    window.iter().all(|&v| v == first).then_some(first)
}

fn mean(window: &[f64]) -> f64 {
    flat_value(window)
        .unwrap_or_else(|| compensated_sum(window.iter().copied()) / window.len() as f64)
}

/// Arithmetic mean of the last `period` values
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    trailing(values, period).map(mean)
}

/// Population standard deviation of the last `period` values
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    let window = trailing(values, period)?;
    if flat_value(window).is_some() {
        return Some(0.0);
    }
    let mean = mean(window);
    let variance = compensated_sum(window.iter().map(|v| (v - mean).powi(2))) / period as f64;
    Some(variance.sqrt())
}

/// Smoothing factor `2 / (period + 1)`
pub fn ema_alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// One EMA step. Written as `prev + α(x − prev)` so a flat input stays exactly flat.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    previous + ema_alpha(period) * (value - previous)
}

/// Trailing SMA at every row
pub fn sma_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| sma(&values[..=i], period))
        .collect()
}

/// Trailing population standard deviation at every row
pub fn standard_deviation_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| standard_deviation(&values[..=i], period))
        .collect()
}

/// EMA at every row, seeded with the SMA of the first `period` values
pub fn ema_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }

    let mut ema = mean(&values[..period]);
    out[period - 1] = Some(ema);
    for i in period..values.len() {
        ema = ema_from_previous(values[i], ema, period);
        out[i] = Some(ema);
    }
    out
}
