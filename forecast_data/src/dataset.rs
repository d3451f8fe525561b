//! Assets, forecast models and the named datasets built from them

use crate::error::{ForecastDataError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A cryptocurrency covered by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Asset {
    Btc,
    Eth,
    Doge,
}

impl Asset {
    /// All assets in display order
    pub const ALL: [Asset; 3] = [Asset::Btc, Asset::Eth, Asset::Doge];

    /// Ticker symbol, e.g. `BTC`
    pub fn symbol(self) -> &'static str {
        match self {
            Asset::Btc => "BTC",
            Asset::Eth => "ETH",
            Asset::Doge => "DOGE",
        }
    }

    /// Lowercase prefix used in file and dataset names
    pub fn slug(self) -> &'static str {
        match self {
            Asset::Btc => "btc",
            Asset::Eth => "eth",
            Asset::Doge => "doge",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Asset {
    type Err = ForecastDataError;

    fn from_str(s: &str) -> Result<Self> {
        Asset::ALL
            .into_iter()
            .find(|asset| asset.symbol().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ForecastDataError::InvalidParameter(format!("Unknown asset: {}", s)))
    }
}

/// A forecasting model whose output the dashboard displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Model {
    Arima,
    Sarima,
    Lstm,
    Prophet,
}

impl Model {
    /// All models in display order
    pub const ALL: [Model; 4] = [Model::Arima, Model::Sarima, Model::Lstm, Model::Prophet];

    /// Display name, e.g. `SARIMA`
    pub fn name(self) -> &'static str {
        match self {
            Model::Arima => "ARIMA",
            Model::Sarima => "SARIMA",
            Model::Lstm => "LSTM",
            Model::Prophet => "PROPHET",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Model::Arima => "arima",
            Model::Sarima => "sarima",
            Model::Lstm => "lstm",
            Model::Prophet => "prophet",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Model {
    type Err = ForecastDataError;

    fn from_str(s: &str) -> Result<Self> {
        Model::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ForecastDataError::InvalidParameter(format!("Unknown model: {}", s)))
    }
}

/// One of the sixteen source tables making up a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dataset {
    /// Cleaned price history of an asset
    Prices(Asset),
    /// Forecast output of one model for one asset
    Forecast(Asset, Model),
    /// Model evaluation summary
    Evaluation,
}

impl Dataset {
    /// Every dataset in load order: prices, forecasts (asset-major), evaluation
    pub fn all() -> Vec<Dataset> {
        let prices = Asset::ALL.into_iter().map(Dataset::Prices);
        let forecasts = Asset::ALL.into_iter().flat_map(|asset| {
            Model::ALL
                .into_iter()
                .map(move |model| Dataset::Forecast(asset, model))
        });
        prices
            .chain(forecasts)
            .chain(std::iter::once(Dataset::Evaluation))
            .collect()
    }

    /// Stable key such as `btc_prices`, `eth_lstm` or `evaluation`
    pub fn name(self) -> String {
        match self {
            Dataset::Prices(asset) => format!("{}_prices", asset.slug()),
            Dataset::Forecast(asset, model) => format!("{}_{}", asset.slug(), model.slug()),
            Dataset::Evaluation => "evaluation".to_string(),
        }
    }

    /// File name used when the configuration does not override it
    pub fn default_file_name(self) -> String {
        match self {
            Dataset::Prices(asset) => format!("cleaned_{}_data.csv", asset.slug()),
            // the BTC Prophet export carries its horizon in the name
            Dataset::Forecast(Asset::Btc, Model::Prophet) => {
                "btc_prophet_forecast_30days.csv".to_string()
            }
            Dataset::Forecast(asset, model) => {
                format!("{}_{}_forecast.csv", asset.slug(), model.slug())
            }
            Dataset::Evaluation => "model_evaluation_summary.csv".to_string(),
        }
    }

    pub fn is_forecast(self) -> bool {
        matches!(self, Dataset::Forecast(..))
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
