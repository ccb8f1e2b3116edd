//! Environment-driven configuration.

use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "./data";

/// Deployment environment name (`APP_ENV`), `sandbox` when unset
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|_| "sandbox".to_string())
}

/// Directory holding raw and processed series (`FEATURE_DATA_DIR`)
pub fn get_data_dir() -> PathBuf {
    env::var("FEATURE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Settings for one batch run of the feature pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub data_dir: PathBuf,
    /// Explicit symbol list; `None` means every symbol the store holds
    pub symbols: Option<Vec<String>>,
    /// Maximum symbols processed at once; `None` means one worker per symbol
    pub concurrency: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            symbols: None,
            concurrency: None,
        }
    }
}

impl PipelineConfig {
    pub fn from_env() -> Result<Self> {
        let symbols = env::var("SYMBOLS").ok().map(|raw| parse_symbols(&raw));

        let concurrency = match env::var("WORKER_CONCURRENCY") {
            Ok(raw) => {
                let value: usize = raw.trim().parse().map_err(|_| {
                    Error::Config(format!("WORKER_CONCURRENCY must be a positive integer, got '{}'", raw))
                })?;
                if value == 0 {
                    return Err(Error::Config("WORKER_CONCURRENCY must be > 0".to_string()));
                }
                Some(value)
            }
            Err(_) => None,
        };

        Ok(Self {
            data_dir: get_data_dir(),
            symbols,
            concurrency,
        })
    }

    /// Worker count for a batch of `symbol_count` symbols
    pub fn effective_concurrency(&self, symbol_count: usize) -> usize {
        self.concurrency.unwrap_or(symbol_count).max(1)
    }
}

/// Split a comma-separated symbol list, dropping blanks
pub fn parse_symbols(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
