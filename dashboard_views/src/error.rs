//! Error types for the dashboard_views crate

use forecast_data::ForecastDataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    /// Loading or converting dashboard data failed
    #[error("Data error: {0}")]
    Data(#[from] ForecastDataError),

    #[error("Invalid page: {0}")]
    InvalidPage(String),

    /// Writing rendered output failed
    #[error("Render error: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ViewError>;
