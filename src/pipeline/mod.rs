//! Per-symbol pipeline: load → indicators → regimes → save.
//!
//! Symbols never share state, so a batch can fan out across blocking worker
//! tasks. Every symbol yields its own outcome; one failure does not stop the
//! others.

use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use futures_util::future::join_all;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::indicators::{compute_indicators, InsufficientHistory};
use crate::regime::{classify_regimes, VolatilityBuckets};
use crate::store::SeriesStore;

/// What a successful run produced for one symbol
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolReport {
    pub symbol: String,
    pub rows: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub warnings: Vec<InsufficientHistory>,
    pub volatility_buckets: Option<VolatilityBuckets>,
}

#[derive(Debug)]
pub struct SymbolOutcome {
    pub symbol: String,
    pub result: Result<SymbolReport>,
}

/// Outcomes of a batch, in the order the symbols were given
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<SymbolOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &Error)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.symbol.as_str(), e)))
    }

    pub fn outcome(&self, symbol: &str) -> Option<&SymbolOutcome> {
        self.outcomes.iter().find(|o| o.symbol == symbol)
    }
}

#[derive(Clone)]
pub struct FeaturePipeline {
    store: Arc<dyn SeriesStore + Send + Sync>,
}

impl FeaturePipeline {
    pub fn new(store: Arc<dyn SeriesStore + Send + Sync>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn SeriesStore + Send + Sync> {
        &self.store
    }

    /// Run the whole pipeline for one symbol and persist the result
    pub fn process_symbol(&self, symbol: &str) -> Result<SymbolReport> {
        let start = Instant::now();

        let series = self.store.load(symbol)?;
        debug!(symbol = %symbol, rows = series.len(), "series loaded, computing indicators");

        let first_date = series.first_date();
        let last_date = series.last_date();

        let indicators = compute_indicators(series);
        for warning in indicators.warnings() {
            warn!(
                symbol = %symbol,
                column = %warning.column,
                required = warning.required,
                available = warning.available,
                "insufficient history, column left undefined"
            );
        }
        let warnings = indicators.warnings().to_vec();

        let table = classify_regimes(indicators);
        self.store.save(symbol, &table)?;

        let report = SymbolReport {
            symbol: symbol.to_string(),
            rows: table.len(),
            first_date,
            last_date,
            warnings,
            volatility_buckets: table.buckets().copied(),
        };

        info!(
            symbol = %symbol,
            rows = report.rows,
            warnings = report.warnings.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "symbol processed"
        );
        Ok(report)
    }

    /// Process symbols one after another
    pub fn run_batch(&self, symbols: &[String]) -> BatchReport {
        let outcomes = symbols
            .iter()
            .map(|symbol| {
                let result = self.process_symbol(symbol);
                log_failure(symbol, &result);
                SymbolOutcome {
                    symbol: symbol.clone(),
                    result,
                }
            })
            .collect();
        BatchReport { outcomes }
    }

    /// Process symbols on blocking worker tasks, at most `concurrency` at a time
    pub async fn run_batch_concurrent(&self, symbols: &[String], concurrency: usize) -> BatchReport {
        let concurrency = concurrency.max(1);
        let permits = Arc::new(Semaphore::new(concurrency));

        info!(
            symbols = symbols.len(),
            concurrency = concurrency,
            "starting concurrent batch"
        );

        let handles = symbols.iter().map(|symbol| {
            let pipeline = self.clone();
            let permits = permits.clone();
            let symbol = symbol.clone();
            tokio::spawn(async move {
                let _permit = permits
                    .acquire_owned()
                    .await
                    .map_err(|e| Error::Worker(e.to_string()))?;
                tokio::task::spawn_blocking(move || pipeline.process_symbol(&symbol))
                    .await
                    .map_err(|e| Error::Worker(e.to_string()))?
            })
        });

        let results = join_all(handles).await;
        let outcomes = symbols
            .iter()
            .zip(results)
            .map(|(symbol, joined)| {
                let result = joined.unwrap_or_else(|e| Err(Error::Worker(e.to_string())));
                log_failure(symbol, &result);
                SymbolOutcome {
                    symbol: symbol.clone(),
                    result,
                }
            })
            .collect();

        BatchReport { outcomes }
    }
}

fn log_failure(symbol: &str, result: &Result<SymbolReport>) {
    if let Err(e) = result {
        warn!(
            symbol = %symbol,
            error = %e,
            data_error = e.is_data_error(),
            "symbol failed"
        );
    }
}
