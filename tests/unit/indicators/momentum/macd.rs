//! Unit tests for MACD indicator

use featurelab::common::math::ema_series;
use featurelab::indicators::momentum::{calculate_macd, calculate_macd_default};

use crate::support::{assert_approx, constant_closes, first_defined, trending_closes, wavy_closes};

#[test]
fn test_macd_insufficient_data() {
    assert!(calculate_macd_default(&wavy_closes(25)).iter().all(Option::is_none));
}

#[test]
fn test_macd_warm_up() {
    let macd = calculate_macd_default(&wavy_closes(40));
    assert_eq!(first_defined(&macd), Some(25));
}

#[test]
fn test_macd_flat_prices() {
    let macd = calculate_macd_default(&constant_closes(60, 100.0));
    assert!(macd.iter().flatten().all(|&v| v == 0.0));
}

#[test]
fn test_macd_is_difference_of_emas() {
    let closes = wavy_closes(80);
    let macd = calculate_macd(&closes, 12, 26);
    let fast = ema_series(&closes, 12);
    let slow = ema_series(&closes, 26);
    for i in 25..closes.len() {
        assert_approx(macd[i].unwrap(), fast[i].unwrap() - slow[i].unwrap());
    }
}

#[test]
fn test_macd_positive_in_uptrend() {
    let macd = calculate_macd_default(&trending_closes(60, 100.0, 1.0));
    assert!(macd.iter().flatten().all(|&v| v > 0.0));
}
