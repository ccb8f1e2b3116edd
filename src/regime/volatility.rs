//! Equal-width bucketing of the Bollinger band spread.

use serde::Serialize;

use crate::models::VolatilityRegime;

/// Observed spread range of one table, cut into three equal-width buckets.
///
/// Buckets are right-closed: `(min, e1]` is Low (with `min` itself included),
/// `(e1, e2]` Medium and `(e2, max]` High.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolatilityBuckets {
    pub min: f64,
    pub max: f64,
}

impl VolatilityBuckets {
    /// Range of the given spreads, `None` when there are none
    pub fn from_spreads<I>(spreads: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        spreads.into_iter().fold(None, |acc, s| match acc {
            None => Some(Self { min: s, max: s }),
            Some(b) => Some(Self {
                min: b.min.min(s),
                max: b.max.max(s),
            }),
        })
    }

    pub fn width(&self) -> f64 {
        (self.max - self.min) / 3.0
    }

    /// `[min, e1, e2, max]`
    pub fn edges(&self) -> [f64; 4] {
        let w = self.width();
        [self.min, self.min + w, self.min + 2.0 * w, self.max]
    }

    /// All spreads identical, e.g. a flat price series
    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }

    /// Label a spread taken from the same table.
    ///
    /// A zero-width range puts its single value in the middle bucket.
    pub fn classify(&self, spread: f64) -> VolatilityRegime {
        if self.is_degenerate() {
            return VolatilityRegime::Medium;
        }
        if spread >= self.max {
            return VolatilityRegime::High;
        }
        let [_, low_edge, high_edge, _] = self.edges();
        if spread <= low_edge {
            VolatilityRegime::Low
        } else if spread <= high_edge {
            VolatilityRegime::Medium
        } else {
            VolatilityRegime::High
        }
    }
}
