//! # Dashboard Views
//!
//! Page models for the crypto forecast dashboard, built from a
//! [`forecast_data::LoadedBundle`].
//!
//! - **Overview**: static project description
//! - **Data View**: first rows of a price history
//! - **EDA**: close trend, price distribution, correlations, volume scatter
//! - **Forecasts**: forecast preview and the chart that can be drawn from it
//! - **Model Evaluation**: the evaluation summary table
//!
//! ## Usage Example
//!
//! ```no_run
//! use dashboard_views::{render_text, PageContent, PageRequest};
//! use forecast_data::{Asset, BundleCache, DataSources, Model};
//!
//! let cache = BundleCache::new(DataSources::new("data"));
//! let bundle = cache.get()?;
//!
//! let page = PageContent::build(bundle, PageRequest::Forecasts(Asset::Eth, Model::Prophet));
//! println!("{}", render_text(&page)?);
//! # Ok::<(), dashboard_views::ViewError>(())
//! ```

pub mod data_view;
pub mod eda;
pub mod error;
pub mod forecast_view;
pub mod overview;
pub mod page;
pub mod render;

pub use crate::data_view::{DataView, PREVIEW_ROWS};
pub use crate::eda::{CorrelationMatrix, EdaReport, Histogram};
pub use crate::error::ViewError;
pub use crate::forecast_view::{ForecastChart, ForecastPage, MISSING_COLUMNS_WARNING};
pub use crate::overview::Overview;
pub use crate::page::{Page, PageContent, PageRequest};
pub use crate::render::{render_json, render_text};
