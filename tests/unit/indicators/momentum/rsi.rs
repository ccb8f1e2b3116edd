//! Unit tests for RSI indicator

use featurelab::indicators::momentum::{calculate_rsi, calculate_rsi_default};

use crate::support::{assert_approx, first_defined, trending_closes, wavy_closes};

#[test]
fn test_rsi_insufficient_data() {
    assert!(calculate_rsi_default(&wavy_closes(13)).iter().all(Option::is_none));
    // 14 rows give only 13 changes
    assert!(calculate_rsi_default(&wavy_closes(14)).iter().all(Option::is_none));
}

#[test]
fn test_rsi_first_defined_row() {
    let rsi = calculate_rsi_default(&wavy_closes(15));
    assert_eq!(first_defined(&rsi), Some(14));
}

#[test]
fn test_rsi_all_gains() {
    let rsi = calculate_rsi_default(&trending_closes(40, 10.0, 1.0));
    assert!(rsi.iter().flatten().all(|&v| v == 100.0));
}

#[test]
fn test_rsi_all_losses() {
    let rsi = calculate_rsi_default(&trending_closes(40, 100.0, -1.0));
    assert!(rsi.iter().flatten().all(|&v| v == 0.0));
}

#[test]
fn test_rsi_bounded() {
    let rsi = calculate_rsi_default(&wavy_closes(300));
    assert!(rsi.iter().flatten().all(|&v| (0.0..=100.0).contains(&v)));
    assert!(rsi.iter().flatten().any(|&v| v > 0.0 && v < 100.0));
}

#[test]
fn test_rsi_wilder_smoothing() {
    // changes: +1, -1, +1
    let rsi = calculate_rsi(&[1.0, 2.0, 1.0, 2.0], 2);
    assert_eq!(rsi[0], None);
    assert_eq!(rsi[1], None);
    // avg gain 0.5, avg loss 0.5
    assert_approx(rsi[2].unwrap(), 50.0);
    // avg gain (0.5 + 1) / 2 = 0.75, avg loss 0.5 / 2 = 0.25 => RS 3
    assert_approx(rsi[3].unwrap(), 75.0);
}

#[test]
fn test_rsi_flat_prices() {
    let rsi = calculate_rsi_default(&[50.0; 20]);
    assert_eq!(first_defined(&rsi), Some(14));
    assert!(rsi.iter().flatten().all(|&v| v == 100.0));
}
