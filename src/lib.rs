//! # crypto_dashboard
//!
//! `crypto_dashboard` bundles the data layer and the page layer of the
//! cryptocurrency forecast dashboard.
//!
//! - [`forecast_data`] loads the price, forecast and evaluation CSV files and
//!   normalizes the forecast schemas.
//! - [`dashboard_views`] turns the loaded bundle into page content and renders it.
//!
//! ## Example
//!
//! ```
//! use crypto_dashboard::{Asset, Model, Page};
//!
//! let asset: Asset = "eth".parse().unwrap();
//! let model: Model = "Prophet".parse().unwrap();
//! assert_eq!(asset, Asset::Eth);
//! assert_eq!(model, Model::Prophet);
//! assert_eq!("model evaluation".parse::<Page>().unwrap(), Page::ModelEvaluation);
//! ```

pub use dashboard_views;
pub use forecast_data;

pub use dashboard_views::{render_json, render_text, Page, PageContent, PageRequest, ViewError};
pub use forecast_data::{
    load_bundle, Asset, BundleCache, DashboardConfig, DataSources, ForecastDataError,
    LoadedBundle, Model,
};

/// Returns the version of the dashboard.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), "0.1.0");
    }

    #[test]
    fn test_member_crates_are_reachable() {
        assert_eq!(forecast_data::dataset::Dataset::all().len(), 16);
        assert_eq!(Page::ALL.len(), 5);
    }

    #[test]
    fn test_unknown_asset() {
        let err = "ada".parse::<Asset>().unwrap_err();
        assert!(matches!(err, ForecastDataError::InvalidParameter(_)));
    }
}
