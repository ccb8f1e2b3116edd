use serde::{Serialize, Serializer};
use std::fmt;

/// Direction of close relative to its 50-row SMA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketTrend {
    Up,
    Down,
}

impl MarketTrend {
    /// `+1` for up, `-1` for down
    pub fn as_i8(self) -> i8 {
        match self {
            MarketTrend::Up => 1,
            MarketTrend::Down => -1,
        }
    }
}

impl Serialize for MarketTrend {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.as_i8())
    }
}

impl fmt::Display for MarketTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

/// Equal-width bucket of the Bollinger band spread, ordered Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum VolatilityRegime {
    Low,
    Medium,
    High,
}

impl VolatilityRegime {
    pub fn as_str(self) -> &'static str {
        match self {
            VolatilityRegime::Low => "Low",
            VolatilityRegime::Medium => "Medium",
            VolatilityRegime::High => "High",
        }
    }
}

impl fmt::Display for VolatilityRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
