//! Dashboard data written to a temporary directory
#![allow(dead_code)]

use forecast_data::{load_bundle, Asset, DataSources, Dataset, LoadedBundle, Model};
use std::fs;
use tempfile::TempDir;

pub const PRICES_CSV: &str = "\
Date,Open,High,Low,Close,Volume
2024-01-01,100.0,110.0,95.0,105.0,1000
2024-01-02,105.0,112.0,101.0,110.0,1500
2024-01-03,110.0,111.0,99.0,100.0,800
2024-01-04,100.0,108.0,98.0,106.0,1200
";

/// ETH has no volume column
pub const ETH_PRICES_CSV: &str = "\
Date,Close,Symbol
2024-01-01,2300.0,ETH
2024-01-02,2350.0,ETH
bad-date,2400.0,ETH
";

pub const EVALUATION_CSV: &str = "\
Coin,Model,MAE,RMSE
BTC,ARIMA,812.4,1033.9
ETH,PROPHET,40.2,51.7
";

fn forecast_csv(asset: Asset, model: Model) -> &'static str {
    match (asset, model) {
        (_, Model::Arima) => "Date,Forecast,Close\n2024-01-05,106.5,107.0\n2024-01-06,107.0,106.0\n",
        (Asset::Eth, Model::Prophet) => "ds,yhat\n2024-01-05,2410.0\n",
        (_, Model::Prophet) => "Date,yhat,yhat_lower\n2024-01-05,106.0,101.0\n,107.0,102.0\n",
        (_, Model::Sarima) => "Date,Predicted,Actual\n2024-01-05,106.2,107.0\n",
        (_, Model::Lstm) => "Date,y_pred\n2024-01-05,105.9\n2024-01-06,106.4\n",
    }
}

/// Write every source and load the bundle; keep the directory alive while testing
pub fn bundle() -> (TempDir, LoadedBundle) {
    let dir = TempDir::new().unwrap();
    for dataset in Dataset::all() {
        let content = match dataset {
            Dataset::Prices(Asset::Eth) => ETH_PRICES_CSV,
            Dataset::Prices(_) => PRICES_CSV,
            Dataset::Forecast(asset, model) => forecast_csv(asset, model),
            Dataset::Evaluation => EVALUATION_CSV,
        };
        fs::write(dir.path().join(dataset.default_file_name()), content).unwrap();
    }
    let bundle = load_bundle(&DataSources::new(dir.path())).unwrap();
    (dir, bundle)
}
