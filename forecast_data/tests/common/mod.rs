//! Shared CSV fixtures for the integration tests
#![allow(dead_code)]

use forecast_data::{Asset, Dataset, Model};
use std::fs;
use std::path::Path;

pub const PRICES_CSV: &str = "\
Date,Open,High,Low,Close,Volume
2024-01-01,42000.0,42800.0,41500.0,42500.0,1000
2024-01-02,42500.0,43100.0,42100.0,42900.0,1200
2024-01-03,42900.0,43000.0,41800.0,42100.0,900
";

pub const EVALUATION_CSV: &str = "\
Coin,Model,MAE,RMSE,MAPE
BTC,ARIMA,812.4,1033.9,1.9
BTC,LSTM,640.2,850.7,1.4
";

/// Forecast CSV content with a different schema per source, as the exporters produce
pub fn forecast_csv(asset: Asset, model: Model) -> &'static str {
    match (asset, model) {
        (_, Model::Arima) => "Date,Forecast,Close\n2024-01-04,42600.0,42700.0\n2024-01-05,42800.0,42650.0\n",
        (_, Model::Sarima) => "Date,Predicted,Actual\n2024-01-04,42550.0,42700.0\n2024-01-05,42750.0,42650.0\n",
        (Asset::Doge, Model::Lstm) => "Date,y_pred,Close\n2024-01-04,0.091,0.09\nnot-a-date,0.092,0.093\n",
        (_, Model::Lstm) => "Date,Actual,Predicted\n2024-01-04,42700.0,42610.0\n2024-01-05,42650.0,42790.0\n",
        (Asset::Eth, Model::Prophet) => "ds,yhat,yhat_lower,yhat_upper\n2024-01-04,2310.0,2250.0,2370.0\n",
        (_, Model::Prophet) => "Date,yhat,yhat_lower,yhat_upper\n2024-01-04,42580.0,41900.0,43260.0\n",
    }
}

/// Write all sixteen default-named sources into `dir`
pub fn write_sources(dir: &Path) {
    for dataset in Dataset::all() {
        let content = match dataset {
            Dataset::Prices(_) => PRICES_CSV,
            Dataset::Forecast(asset, model) => forecast_csv(asset, model),
            Dataset::Evaluation => EVALUATION_CSV,
        };
        fs::write(dir.join(dataset.default_file_name()), content).unwrap();
    }
}
