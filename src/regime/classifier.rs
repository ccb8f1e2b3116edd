//! Batch classification of a whole indicator table.

use tracing::debug;

use super::trend::market_trend;
use super::volatility::VolatilityBuckets;
use crate::models::{IndicatorTable, RegimeTable};

/// Append Market_Trend and Volatility_Regime to `table`.
///
/// Trend is a per-row function of close and SMA_50. Volatility buckets are
/// cut from the min/max spread of the entire table, so labels are only
/// stable for a fixed history.
pub fn classify_regimes(table: IndicatorTable) -> RegimeTable {
    let trend = table
        .rows()
        .map(|row| market_trend(row.close, row.sma_50))
        .collect();

    let spreads: Vec<Option<f64>> = table.rows().map(|row| row.spread()).collect();
    let buckets = VolatilityBuckets::from_spreads(spreads.iter().flatten().copied());

    let volatility_regime = spreads
        .iter()
        .map(|spread| Some(buckets?.classify((*spread)?)))
        .collect();

    match &buckets {
        Some(b) => debug!(
            rows = table.len(),
            min_spread = b.min,
            max_spread = b.max,
            degenerate = b.is_degenerate(),
            "volatility buckets computed"
        ),
        None => debug!(rows = table.len(), "no defined spread, volatility regime left undefined"),
    }

    RegimeTable {
        indicators: table,
        market_trend: trend,
        volatility_regime,
        buckets,
    }
}
