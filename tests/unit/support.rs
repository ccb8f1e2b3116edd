//! Series builders shared by the unit tests

#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use featurelab::models::{PriceBar, PriceSeries};

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

pub fn bars_from_closes(closes: &[f64]) -> Vec<PriceBar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            PriceBar::new(
                start_date() + Days::new(i as u64),
                close,
                close + 0.5,
                (close - 0.5).max(0.0),
                close,
                1000.0,
            )
        })
        .collect()
}

pub fn series_from_closes(closes: &[f64]) -> PriceSeries {
    PriceSeries::new(bars_from_closes(closes)).expect("test series is valid")
}

pub fn constant_closes(count: usize, price: f64) -> Vec<f64> {
    vec![price; count]
}

pub fn trending_closes(count: usize, base: f64, step: f64) -> Vec<f64> {
    (0..count).map(|i| base + i as f64 * step).collect()
}

/// Oscillating, slowly drifting closes
pub fn wavy_closes(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 100.0 + 10.0 * (i as f64 * 0.3).sin() + i as f64 * 0.05)
        .collect()
}

pub fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// Index of the first defined value
pub fn first_defined(column: &[Option<f64>]) -> Option<usize> {
    column.iter().position(Option::is_some)
}
