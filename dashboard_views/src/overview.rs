//! Static project overview

use forecast_data::{Asset, Model};
use serde::Serialize;

/// Project description shown on the landing page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub project: &'static str,
    pub data_source: &'static str,
    pub coins: Vec<Asset>,
    pub models: Vec<Model>,
    /// (stage, what was done)
    pub work_done: Vec<(&'static str, &'static str)>,
    pub evaluation: &'static str,
}

impl Default for Overview {
    fn default() -> Self {
        Self {
            project: "Cryptocurrency EDA, Forecasting, and Model Evaluation",
            data_source: "Yahoo Finance (yfinance)",
            coins: Asset::ALL.to_vec(),
            models: Model::ALL.to_vec(),
            work_done: vec![
                (
                    "Data Cleaning & Preprocessing",
                    "Removed missing values, handled outliers, formatted timestamps, and prepared data for modeling.",
                ),
                (
                    "Exploratory Data Analysis (EDA)",
                    "Visualized and analyzed price trends, volatility, and trading volume patterns.",
                ),
                (
                    "Forecasting Models Implemented",
                    "ARIMA, SARIMA, LSTM (Long Short-Term Memory), Prophet",
                ),
            ],
            evaluation: "Comparison table of performance metrics for all models across all three cryptocurrencies.",
        }
    }
}
