//! CSV files under a data directory, one raw and one processed file per symbol.
//!
//! Raw input for `SYM` lives in `SYM_historical.csv`; the processed table is
//! written next to it as `processed_SYM_historical.csv`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use super::SeriesStore;
use crate::error::{Error, Result, SeriesError};
use crate::models::{PriceBar, PriceSeries, RegimeTable};

pub const RAW_SUFFIX: &str = "_historical.csv";
pub const PROCESSED_PREFIX: &str = "processed_";

/// Required input columns, matched case-insensitively
pub const REQUIRED_COLUMNS: [&str; 6] = ["date", "open", "high", "low", "close", "volume"];

const RAW_HEADERS: [&str; 6] = ["Date", "Open", "High", "Low", "Close", "Volume"];

pub const PROCESSED_HEADERS: [&str; 14] = [
    "Date",
    "Open",
    "High",
    "Low",
    "Close",
    "Volume",
    "SMA_50",
    "EMA_20",
    "RSI",
    "MACD",
    "BB_High",
    "BB_Low",
    "Market_Trend",
    "Volatility_Regime",
];

#[derive(Debug, Clone)]
pub struct CsvSeriesStore {
    data_dir: PathBuf,
}

impl CsvSeriesStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn raw_path(&self, symbol: &str) -> PathBuf {
        self.data_dir.join(format!("{}{}", symbol, RAW_SUFFIX))
    }

    pub fn processed_path(&self, symbol: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}{}{}", PROCESSED_PREFIX, symbol, RAW_SUFFIX))
    }

    /// Write a raw series in the input layout, replacing any existing file
    pub fn write_series(&self, symbol: &str, series: &PriceSeries) -> Result<()> {
        validate_symbol(symbol)?;
        let path = self.raw_path(symbol);
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)?;
        writer.write_record(RAW_HEADERS)?;
        for bar in series.bars() {
            writer.serialize(bar)?;
        }
        writer.flush()?;
        debug!(symbol = %symbol, rows = series.len(), path = %path.display(), "raw series written");
        Ok(())
    }

    fn read_bars(&self, symbol: &str, path: &Path) -> Result<Vec<PriceBar>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;

        let columns: HashMap<String, usize> = reader
            .headers()
            .map_err(|e| decode_error(symbol, e))?
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_lowercase(), i))
            .collect();

        let mut index = [0usize; 6];
        for (slot, name) in index.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = *columns
                .get(name)
                .ok_or_else(|| Error::malformed(symbol, SeriesError::MissingColumn(name.to_string())))?;
        }
        let [date_idx, open_idx, high_idx, low_idx, close_idx, volume_idx] = index;

        let mut bars = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| decode_error(symbol, e))?;
            let field = |i: usize| record.get(i).unwrap_or("");
            let number = |i: usize, name: &'static str| -> Result<f64> {
                parse_number(field(i), row, name).map_err(|reason| Error::malformed(symbol, reason))
            };

            let date = parse_date(field(date_idx))
                .ok_or_else(|| {
                    SeriesError::InvalidDate {
                        row,
                        value: field(date_idx).to_string(),
                    }
                })
                .map_err(|reason| Error::malformed(symbol, reason))?;

            bars.push(PriceBar::new(
                date,
                number(open_idx, "open")?,
                number(high_idx, "high")?,
                number(low_idx, "low")?,
                number(close_idx, "close")?,
                number(volume_idx, "volume")?,
            ));
        }
        Ok(bars)
    }
}

impl SeriesStore for CsvSeriesStore {
    fn load(&self, symbol: &str) -> Result<PriceSeries> {
        validate_symbol(symbol)?;
        let path = self.raw_path(symbol);
        if !path.is_file() {
            return Err(Error::NotFound {
                symbol: symbol.to_string(),
            });
        }

        let bars = self.read_bars(symbol, &path)?;
        let series = PriceSeries::new(bars).map_err(|reason| Error::malformed(symbol, reason))?;
        debug!(symbol = %symbol, rows = series.len(), path = %path.display(), "series loaded");
        Ok(series)
    }

    fn save(&self, symbol: &str, table: &RegimeTable) -> Result<()> {
        validate_symbol(symbol)?;
        let path = self.processed_path(symbol);
        let staging = path.with_extension("csv.tmp");

        let written = write_table(&staging, table)
            .and_then(|()| fs::rename(&staging, &path).map_err(Error::from));
        if let Err(e) = written {
            let _ = fs::remove_file(&staging);
            return Err(e);
        }
        debug!(symbol = %symbol, rows = table.len(), path = %path.display(), "table saved");
        Ok(())
    }

    fn symbols(&self) -> Result<Vec<String>> {
        let mut symbols = Vec::new();
        for entry in fs::read_dir(&self.data_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if name.starts_with(PROCESSED_PREFIX) {
                continue;
            }
            if let Some(symbol) = name.strip_suffix(RAW_SUFFIX) {
                if !symbol.is_empty() {
                    symbols.push(symbol.to_string());
                }
            }
        }
        symbols.sort();
        Ok(symbols)
    }
}

fn write_table(path: &Path, table: &RegimeTable) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(PROCESSED_HEADERS)?;
    for row in table.rows() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Symbols become file names, so they must name a single entry in the data directory
pub fn validate_symbol(symbol: &str) -> Result<()> {
    let invalid = symbol.is_empty()
        || symbol == "."
        || symbol == ".."
        || symbol.contains(['/', '\\', '\0']);
    if invalid {
        return Err(Error::Config(format!("invalid symbol '{}'", symbol)));
    }
    Ok(())
}

/// Parse `YYYY-MM-DD`, also accepting timestamps that start with one
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().or_else(|| {
        value
            .get(..10)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
    })
}

fn parse_number(value: &str, row: usize, field: &'static str) -> std::result::Result<f64, SeriesError> {
    value.parse::<f64>().map_err(|_| SeriesError::InvalidValue {
        row,
        field,
        value: value.to_string(),
    })
}

// Broken records are a data problem; only IO failures are storage errors.
fn decode_error(symbol: &str, e: csv::Error) -> Error {
    if e.is_io_error() {
        Error::Csv(e)
    } else {
        Error::malformed(symbol, SeriesError::Decode(e.to_string()))
    }
}
