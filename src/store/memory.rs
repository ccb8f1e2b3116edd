use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::SeriesStore;
use crate::error::{Error, Result};
use crate::models::{PriceBar, PriceSeries, RegimeTable};

/// In-process store. Raw rows are kept unvalidated and checked on load, like
/// a file would be.
#[derive(Debug, Default)]
pub struct MemorySeriesStore {
    raw: RwLock<HashMap<String, Vec<PriceBar>>>,
    processed: RwLock<HashMap<String, RegimeTable>>,
}

impl MemorySeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, symbol: &str, series: PriceSeries) {
        self.insert_bars(symbol, series.bars().to_vec());
    }

    /// Store rows as-is; invariant violations surface on `load`
    pub fn insert_bars(&self, symbol: &str, bars: Vec<PriceBar>) {
        self.raw
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(symbol.to_string(), bars);
    }

    /// Last table saved for `symbol`
    pub fn saved(&self, symbol: &str) -> Option<RegimeTable> {
        self.processed
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(symbol)
            .cloned()
    }
}

impl SeriesStore for MemorySeriesStore {
    fn load(&self, symbol: &str) -> Result<PriceSeries> {
        let raw = self.raw.read().unwrap_or_else(PoisonError::into_inner);
        let bars = raw.get(symbol).ok_or_else(|| Error::NotFound {
            symbol: symbol.to_string(),
        })?;
        PriceSeries::new(bars.clone()).map_err(|reason| Error::malformed(symbol, reason))
    }

    fn save(&self, symbol: &str, table: &RegimeTable) -> Result<()> {
        self.processed
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(symbol.to_string(), table.clone());
        Ok(())
    }

    fn symbols(&self) -> Result<Vec<String>> {
        let mut symbols: Vec<String> = self
            .raw
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        symbols.sort();
        Ok(symbols)
    }
}
