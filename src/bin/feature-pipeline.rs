//! Feature Pipeline
//!
//! Computes indicator and regime columns for every raw series in the data
//! directory (or the symbols listed in `SYMBOLS`) and writes the processed
//! tables back next to them.

use dotenvy::dotenv;
use featurelab::config::{get_environment, PipelineConfig};
use featurelab::logging;
use featurelab::pipeline::FeaturePipeline;
use featurelab::store::{CsvSeriesStore, SeriesStore};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = PipelineConfig::from_env()?;
    info!(environment = %get_environment(), data_dir = %config.data_dir.display(), "Starting feature pipeline");

    let store = CsvSeriesStore::new(config.data_dir.clone())?;
    let symbols = match &config.symbols {
        Some(symbols) => symbols.clone(),
        None => store.symbols()?,
    };

    if symbols.is_empty() {
        warn!(data_dir = %config.data_dir.display(), "No raw series found - nothing to process");
        return Ok(());
    }
    info!(symbols = ?symbols, "Symbols discovered");

    let concurrency = config.effective_concurrency(symbols.len());
    let pipeline = FeaturePipeline::new(Arc::new(store));
    let report = pipeline.run_batch_concurrent(&symbols, concurrency).await;

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(summary) => info!(
                symbol = %outcome.symbol,
                rows = summary.rows,
                from = ?summary.first_date,
                to = ?summary.last_date,
                warnings = summary.warnings.len(),
                "ok"
            ),
            Err(e) => warn!(symbol = %outcome.symbol, error = %e, "failed"),
        }
    }

    info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        "Batch finished"
    );

    Ok(())
}
