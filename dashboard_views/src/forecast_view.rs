//! Forecast page: preview table plus the chart that can be drawn from it

use crate::data_view::PREVIEW_ROWS;
use chrono::NaiveDateTime;
use forecast_data::normalize::{ACTUAL, DATE, PREDICTED_CLOSE};
use forecast_data::{Asset, LoadedBundle, Model, Table, Value};
use serde::Serialize;
use tracing::warn;

/// Shown instead of a chart when the forecast lacks the required columns
pub const MISSING_COLUMNS_WARNING: &str =
    "Forecast data missing required columns (Date, Predicted_Close). Please check the CSV file format.";

/// One dated forecast row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub date: NaiveDateTime,
    pub predicted: Option<f64>,
    /// Always `None` on predicted-only charts
    pub actual: Option<f64>,
}

/// What the forecast chart draws
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ForecastChart {
    /// `Actual` and `Predicted_Close` against `Date`
    ActualVsPredicted {
        title: String,
        points: Vec<ForecastPoint>,
    },
    /// `Predicted_Close` against `Date`
    PredictedOnly {
        title: String,
        points: Vec<ForecastPoint>,
    },
    /// Required columns are absent
    Unavailable { missing: Vec<&'static str> },
}

impl ForecastChart {
    /// Decide what can be charted from a normalized forecast table.
    ///
    /// Rows whose date is missing are left out of the chart.
    pub fn plan(asset: Asset, model: Model, table: &Table) -> Self {
        let missing: Vec<&'static str> = [DATE, PREDICTED_CLOSE]
            .into_iter()
            .filter(|column| !table.has_column(column))
            .collect();
        if !missing.is_empty() {
            warn!(
                dataset = table.name(),
                missing = ?missing,
                "Forecast chart not renderable"
            );
            return ForecastChart::Unavailable { missing };
        }

        let with_actual = table.has_column(ACTUAL);
        let points = chart_points(table, with_actual);

        if with_actual {
            ForecastChart::ActualVsPredicted {
                title: format!("{} {} Forecast (Actual vs Predicted)", asset, model),
                points,
            }
        } else {
            ForecastChart::PredictedOnly {
                title: format!("{} {} Forecast", asset, model),
                points,
            }
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            ForecastChart::ActualVsPredicted { title, .. }
            | ForecastChart::PredictedOnly { title, .. } => Some(title.as_str()),
            ForecastChart::Unavailable { .. } => None,
        }
    }

    pub fn points(&self) -> &[ForecastPoint] {
        match self {
            ForecastChart::ActualVsPredicted { points, .. }
            | ForecastChart::PredictedOnly { points, .. } => points.as_slice(),
            ForecastChart::Unavailable { .. } => &[],
        }
    }

    /// Warning text for an unrenderable chart
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            ForecastChart::Unavailable { .. } => Some(MISSING_COLUMNS_WARNING),
            _ => None,
        }
    }

    pub fn is_renderable(&self) -> bool {
        !matches!(self, ForecastChart::Unavailable { .. })
    }
}

fn chart_points(table: &Table, with_actual: bool) -> Vec<ForecastPoint> {
    (0..table.len())
        .filter_map(|row| {
            let date = table.get(row, DATE).and_then(Value::as_timestamp)?;
            let predicted = table.get(row, PREDICTED_CLOSE).and_then(Value::as_f64);
            let actual = if with_actual {
                table.get(row, ACTUAL).and_then(Value::as_f64)
            } else {
                None
            };
            Some(ForecastPoint {
                date,
                predicted,
                actual,
            })
        })
        .collect()
}

/// The forecast page for one asset and model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPage {
    pub asset: Asset,
    pub model: Model,
    pub preview: Table,
    pub chart: ForecastChart,
}

impl ForecastPage {
    pub fn build(bundle: &LoadedBundle, asset: Asset, model: Model) -> Self {
        let table = bundle.forecast(asset, model);
        Self {
            asset,
            model,
            preview: table.head(PREVIEW_ROWS),
            chart: ForecastChart::plan(asset, model, table),
        }
    }
}
