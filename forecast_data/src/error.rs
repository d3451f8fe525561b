//! Error types for the forecast_data crate

use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for the forecast_data crate
#[derive(Debug, Error)]
pub enum ForecastDataError {
    /// A named source file is missing, unreadable or not tabular
    #[error("Data source error: '{name}' ({}): {reason}", path.display())]
    DataSourceError {
        /// Dataset name, e.g. `btc_arima`
        name: String,
        /// Path that was read
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to configuration loading or validation
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from JSON (de)serialization
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    PolarsError(String),
}

impl ForecastDataError {
    /// Build a source error for the dataset `name` read from `path`
    pub fn data_source(name: impl Into<String>, path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ForecastDataError::DataSourceError {
            name: name.into(),
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastDataError>;

impl From<PolarsError> for ForecastDataError {
    fn from(err: PolarsError) -> Self {
        ForecastDataError::PolarsError(err.to_string())
    }
}
