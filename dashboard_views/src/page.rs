//! Dashboard pages and the data each one shows

use crate::data_view::DataView;
use crate::eda::EdaReport;
use crate::error::{Result, ViewError};
use crate::forecast_view::ForecastPage;
use crate::overview::Overview;
use forecast_data::{Asset, LoadedBundle, Model, Table};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The pages of the dashboard menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Page {
    Overview,
    DataView,
    Eda,
    Forecasts,
    ModelEvaluation,
}

impl Page {
    /// Menu order
    pub const ALL: [Page; 5] = [
        Page::Overview,
        Page::DataView,
        Page::Eda,
        Page::Forecasts,
        Page::ModelEvaluation,
    ];

    /// Label in the navigation menu
    pub fn label(self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::DataView => "Data View",
            Page::Eda => "EDA",
            Page::Forecasts => "Forecasts",
            Page::ModelEvaluation => "Model Evaluation",
        }
    }

    /// Heading shown at the top of the page
    pub fn title(self) -> &'static str {
        match self {
            Page::Overview => "Cryptocurrency Analysis Dashboard",
            Page::DataView => "Data View",
            Page::Eda => "Exploratory Data Analysis",
            Page::Forecasts => "Forecast Models",
            Page::ModelEvaluation => "Model Evaluation Summary",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Page {
    type Err = ViewError;

    /// Accepts menu labels case-insensitively, with spaces, dashes or underscores
    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize_label(s);
        Page::ALL
            .into_iter()
            .find(|page| normalize_label(page.label()) == wanted)
            .ok_or_else(|| ViewError::InvalidPage(s.to_string()))
    }
}

fn normalize_label(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .to_lowercase()
}

/// A page together with the selections it needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Overview,
    DataView(Asset),
    Eda(Asset),
    Forecasts(Asset, Model),
    ModelEvaluation,
}

impl PageRequest {
    pub fn page(self) -> Page {
        match self {
            PageRequest::Overview => Page::Overview,
            PageRequest::DataView(_) => Page::DataView,
            PageRequest::Eda(_) => Page::Eda,
            PageRequest::Forecasts(..) => Page::Forecasts,
            PageRequest::ModelEvaluation => Page::ModelEvaluation,
        }
    }
}

/// Everything one page displays
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", content = "data", rename_all = "snake_case")]
pub enum PageContent {
    Overview(Overview),
    DataView(DataView),
    Eda(EdaReport),
    Forecasts(ForecastPage),
    ModelEvaluation(Table),
}

impl PageContent {
    /// Build the content of a page from the loaded bundle
    pub fn build(bundle: &LoadedBundle, request: PageRequest) -> Self {
        match request {
            PageRequest::Overview => PageContent::Overview(Overview::default()),
            PageRequest::DataView(asset) => PageContent::DataView(DataView::build(bundle, asset)),
            PageRequest::Eda(asset) => {
                PageContent::Eda(EdaReport::from_prices(asset, bundle.price_history(asset)))
            }
            PageRequest::Forecasts(asset, model) => {
                PageContent::Forecasts(ForecastPage::build(bundle, asset, model))
            }
            PageRequest::ModelEvaluation => {
                PageContent::ModelEvaluation(bundle.evaluation().clone())
            }
        }
    }

    pub fn page(&self) -> Page {
        match self {
            PageContent::Overview(_) => Page::Overview,
            PageContent::DataView(_) => Page::DataView,
            PageContent::Eda(_) => Page::Eda,
            PageContent::Forecasts(_) => Page::Forecasts,
            PageContent::ModelEvaluation(_) => Page::ModelEvaluation,
        }
    }
}
