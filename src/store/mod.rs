//! Storage boundary for raw series and processed tables.

pub mod file;
pub mod memory;

pub use file::CsvSeriesStore;
pub use memory::MemorySeriesStore;

use crate::error::Result;
use crate::models::{PriceSeries, RegimeTable};

/// Keyed storage of one series per symbol.
///
/// Implementations are shared across worker tasks, so they take `&self`.
pub trait SeriesStore {
    /// Load and validate the raw series for `symbol`.
    ///
    /// Fails with `NotFound` when nothing is stored under `symbol` and with
    /// `MalformedData` when the stored rows break the series invariants.
    fn load(&self, symbol: &str) -> Result<PriceSeries>;

    /// Persist a processed table, replacing any earlier one for `symbol`
    fn save(&self, symbol: &str, table: &RegimeTable) -> Result<()>;

    /// Symbols that currently have a raw series, sorted
    fn symbols(&self) -> Result<Vec<String>>;
}
