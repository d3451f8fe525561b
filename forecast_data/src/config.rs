//! Configuration for locating the dashboard's source files

use crate::dataset::Dataset;
use crate::error::{ForecastDataError, Result};
use crate::logging::LogConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Environment variable overriding [`DataSources::data_dir`]
pub const DATA_DIR_ENV: &str = "CRYPTO_DASHBOARD_DATA_DIR";

/// Where the sixteen source tables live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSources {
    /// Directory the file names are resolved against
    pub data_dir: PathBuf,
    /// File name overrides keyed by dataset name (`btc_prices`, `eth_lstm`, `evaluation`, ...)
    pub files: BTreeMap<String, String>,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            files: BTreeMap::new(),
        }
    }
}

impl DataSources {
    /// Sources with default file names under `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    /// Override the file name of one dataset
    pub fn with_file(mut self, dataset: Dataset, file_name: impl Into<String>) -> Self {
        self.files.insert(dataset.name(), file_name.into());
        self
    }

    /// File name for a dataset, override first
    pub fn file_name(&self, dataset: Dataset) -> String {
        self.files
            .get(&dataset.name())
            .cloned()
            .unwrap_or_else(|| dataset.default_file_name())
    }

    /// Full path of a dataset's source file
    pub fn path(&self, dataset: Dataset) -> PathBuf {
        self.data_dir.join(self.file_name(dataset))
    }

    /// Reject overrides for unknown datasets and blank file names
    pub fn validate(&self) -> Result<()> {
        let known: Vec<String> = Dataset::all().into_iter().map(Dataset::name).collect();
        for (key, file_name) in &self.files {
            if !known.contains(key) {
                return Err(ForecastDataError::ConfigError(format!(
                    "Unknown dataset '{}' in file overrides",
                    key
                )));
            }
            if file_name.trim().is_empty() {
                return Err(ForecastDataError::ConfigError(format!(
                    "Empty file name for dataset '{}'",
                    key
                )));
            }
        }
        Ok(())
    }
}

/// Top-level dashboard configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub sources: DataSources,
    pub log: LogConfig,
}

impl DashboardConfig {
    /// Load and validate a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ForecastDataError::ConfigError(format!(
                "Cannot open config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `CRYPTO_DASHBOARD_DATA_DIR`, `LOG_LEVEL` and `LOG_FORMAT` where set
    pub fn with_env_overrides(mut self) -> Self {
        self.log = self.log.with_env_overrides();
        let data_dir = env::var(DATA_DIR_ENV).ok();
        self.with_data_dir_override(data_dir)
    }

    /// Replace the data directory when `data_dir` is a non-empty value
    pub fn with_data_dir_override(mut self, data_dir: Option<String>) -> Self {
        if let Some(dir) = data_dir.filter(|d| !d.trim().is_empty()) {
            self.sources.data_dir = PathBuf::from(dir);
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.sources.validate()
    }
}
