use crate::models::MarketTrend;

/// Up when close is strictly above the SMA, down otherwise; `None` while the SMA is undefined
pub fn market_trend(close: f64, sma: Option<f64>) -> Option<MarketTrend> {
    let sma = sma?;
    Some(if close > sma {
        MarketTrend::Up
    } else {
        MarketTrend::Down
    })
}
