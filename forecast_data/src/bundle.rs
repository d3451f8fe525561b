//! Loading the full set of dashboard tables

use crate::config::DataSources;
use crate::dataset::{Asset, Dataset, Model};
use crate::error::{ForecastDataError, Result};
use crate::normalize::normalize_forecast_in_place;
use crate::table::Table;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

/// Every table the dashboard shows.
///
/// Price histories and the evaluation summary are kept as read; forecast
/// tables are normalized. Built once by [`load_bundle`] and read-only after.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedBundle {
    prices: [Table; 3],
    forecasts: [[Table; 4]; 3],
    evaluation: Table,
}

impl LoadedBundle {
    /// Raw price history of an asset
    pub fn price_history(&self, asset: Asset) -> &Table {
        &self.prices[asset.index()]
    }

    /// Normalized forecast table for an asset and model
    pub fn forecast(&self, asset: Asset, model: Model) -> &Table {
        &self.forecasts[asset.index()][model.index()]
    }

    /// All forecast tables of one asset in model order
    pub fn forecasts_for(&self, asset: Asset) -> impl Iterator<Item = (Model, &Table)> + '_ {
        Model::ALL
            .into_iter()
            .map(move |model| (model, self.forecast(asset, model)))
    }

    /// Model evaluation summary
    pub fn evaluation(&self) -> &Table {
        &self.evaluation
    }

    pub fn table(&self, dataset: Dataset) -> &Table {
        match dataset {
            Dataset::Prices(asset) => self.price_history(asset),
            Dataset::Forecast(asset, model) => self.forecast(asset, model),
            Dataset::Evaluation => self.evaluation(),
        }
    }

    /// All sixteen tables in load order
    pub fn tables(&self) -> impl Iterator<Item = (Dataset, &Table)> + '_ {
        Dataset::all()
            .into_iter()
            .map(move |dataset| (dataset, self.table(dataset)))
    }
}

/// Read one named CSV source.
///
/// Any failure is reported as a [`ForecastDataError::DataSourceError`] naming
/// the dataset and path.
pub fn read_table(name: &str, path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|e| ForecastDataError::data_source(name, path, e))?;
    let table = Table::from_reader(name, BufReader::new(file))
        .map_err(|e| ForecastDataError::data_source(name, path, e))?;

    debug!(
        dataset = name,
        path = %path.display(),
        rows = table.len(),
        columns = table.width(),
        "Read table"
    );
    Ok(table)
}

fn read_dataset(sources: &DataSources, dataset: Dataset) -> Result<Table> {
    read_table(&dataset.name(), &sources.path(dataset))
}

fn read_forecast(sources: &DataSources, asset: Asset, model: Model) -> Result<Table> {
    let mut table = read_dataset(sources, Dataset::Forecast(asset, model))?;
    let summary = normalize_forecast_in_place(&mut table);

    if summary.invalid_dates > 0 {
        warn!(
            dataset = table.name(),
            invalid_dates = summary.invalid_dates,
            "Unparseable dates replaced with missing values"
        );
    }
    Ok(table)
}

/// Load and normalize every table.
///
/// Fails on the first source that cannot be read; no partial bundle is
/// returned.
pub fn load_bundle(sources: &DataSources) -> Result<LoadedBundle> {
    sources.validate()?;

    let prices = Asset::ALL
        .into_iter()
        .map(|asset| read_dataset(sources, Dataset::Prices(asset)))
        .collect::<Result<Vec<_>>>()?;

    let mut forecasts: Vec<[Table; 4]> = Vec::with_capacity(Asset::ALL.len());
    for asset in Asset::ALL {
        let tables = Model::ALL
            .into_iter()
            .map(|model| read_forecast(sources, asset, model))
            .collect::<Result<Vec<_>>>()?;
        forecasts.push(into_array(tables)?);
    }

    let evaluation = read_dataset(sources, Dataset::Evaluation)?;

    let bundle = LoadedBundle {
        prices: into_array(prices)?,
        forecasts: into_array(forecasts)?,
        evaluation,
    };
    info!(
        data_dir = %sources.data_dir.display(),
        tables = Dataset::all().len(),
        "Loaded dashboard data"
    );
    Ok(bundle)
}

fn into_array<T, const N: usize>(items: Vec<T>) -> Result<[T; N]> {
    let len = items.len();
    items.try_into().map_err(|_| {
        ForecastDataError::DataError(format!("Expected {} tables, found {}", N, len))
    })
}

/// A bundle loaded at most once.
///
/// Owned by the caller and passed by reference to whatever renders pages. A
/// failed load is not remembered, so the next [`BundleCache::get`] retries.
#[derive(Debug)]
pub struct BundleCache {
    sources: DataSources,
    bundle: OnceLock<LoadedBundle>,
}

impl BundleCache {
    pub fn new(sources: DataSources) -> Self {
        Self {
            sources,
            bundle: OnceLock::new(),
        }
    }

    /// The bundle, loading it on first use
    pub fn get(&self) -> Result<&LoadedBundle> {
        if let Some(bundle) = self.bundle.get() {
            return Ok(bundle);
        }
        let loaded = load_bundle(&self.sources)?;
        Ok(self.bundle.get_or_init(|| loaded))
    }

    pub fn is_loaded(&self) -> bool {
        self.bundle.get().is_some()
    }

    pub fn sources(&self) -> &DataSources {
        &self.sources
    }
}
