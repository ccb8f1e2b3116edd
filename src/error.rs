//! Error types for loading, validating and persisting series.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// No stored series for the requested symbol
    #[error("No series found for symbol {symbol}")]
    NotFound { symbol: String },

    /// Stored series violates the price series invariants
    #[error("Malformed data for symbol {symbol}: {reason}")]
    MalformedData { symbol: String, reason: SeriesError },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A worker task died before reporting a result
    #[error("Worker task failed: {0}")]
    Worker(String),

    /// CSV encoding/decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn malformed(symbol: &str, reason: SeriesError) -> Self {
        Error::MalformedData {
            symbol: symbol.to_string(),
            reason,
        }
    }

    /// Whether the failure is about the data itself rather than the storage layer
    pub fn is_data_error(&self) -> bool {
        matches!(self, Error::NotFound { .. } | Error::MalformedData { .. })
    }
}

/// Violations of the [`PriceSeries`](crate::models::PriceSeries) invariants
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: cannot parse {field} value '{value}'")]
    InvalidValue {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("row {row}: cannot parse date '{value}'")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}: date {date} does not follow {previous}")]
    NonIncreasingDate {
        row: usize,
        previous: NaiveDate,
        date: NaiveDate,
    },

    #[error("row {row}: {field} is not finite")]
    NonFinite { row: usize, field: &'static str },

    #[error("row {row}: {field} is negative ({value})")]
    Negative {
        row: usize,
        field: &'static str,
        value: f64,
    },

    #[error("undecodable record: {0}")]
    Decode(String),
}
