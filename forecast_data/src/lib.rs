//! # Forecast Data
//!
//! Loading and schema normalization for the crypto forecast dashboard.
//!
//! The dashboard reads sixteen precomputed CSV tables:
//!
//! - cleaned price histories for BTC, ETH and DOGE
//! - forecast outputs of ARIMA, SARIMA, LSTM and Prophet for each asset
//! - a model evaluation summary
//!
//! Forecast exports name their columns inconsistently, so every forecast table
//! is normalized to `Date` (timestamp), `Predicted_Close` and, when available,
//! `Actual`. Price histories and the evaluation summary are passed through as
//! read.
//!
//! ## Quick Start
//!
//! ```no_run
//! use forecast_data::{Asset, BundleCache, DataSources, Model};
//! use forecast_data::normalize::PREDICTED_CLOSE;
//!
//! let cache = BundleCache::new(DataSources::new("data"));
//! let bundle = cache.get()?;
//!
//! let forecast = bundle.forecast(Asset::Btc, Model::Lstm);
//! if forecast.has_column(PREDICTED_CLOSE) {
//!     println!("{} rows of predictions", forecast.len());
//! }
//! # Ok::<(), forecast_data::ForecastDataError>(())
//! ```

pub mod bundle;
pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod table;

// Re-export commonly used types
pub use crate::bundle::{load_bundle, read_table, BundleCache, LoadedBundle};
pub use crate::config::{DashboardConfig, DataSources};
pub use crate::dataset::{Asset, Dataset, Model};
pub use crate::error::ForecastDataError;
pub use crate::normalize::{normalize_forecast, normalize_forecast_in_place, NormalizeSummary};
pub use crate::table::{ColumnKind, Table, Value};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
