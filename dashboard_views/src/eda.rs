//! Exploratory statistics over a price history table

use chrono::NaiveDateTime;
use forecast_data::normalize::{coerce_date, CLOSE, DATE};
use forecast_data::{Asset, ColumnKind, Table};
use serde::Serialize;
use statrs::statistics::Statistics;

/// Number of histogram bins for the close-price distribution
pub const HISTOGRAM_BINS: usize = 50;

/// Volume column name in price histories
pub const VOLUME: &str = "Volume";

/// One point of the close-price trend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDateTime,
    pub close: f64,
}

/// Summary statistics of the close price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloseSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl CloseSummary {
    /// Summarize finite values, `None` when there are none
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let (min, max) = min_max(values)?;
        Some(Self {
            count: values.len(),
            mean: values.iter().mean(),
            std_dev: values.iter().std_dev(),
            min,
            max,
        })
    }
}

/// Equal-width histogram between the minimum and maximum value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin finite values into `bins` buckets; the maximum lands in the last one.
    ///
    /// Returns `None` for no values or zero bins. When all values are equal
    /// they share the first bin and the width is zero.
    pub fn new(values: &[f64], bins: usize) -> Option<Self> {
        if bins == 0 {
            return None;
        }
        let (min, max) = min_max(values)?;
        let bin_width = (max - min) / bins as f64;

        let mut counts = vec![0; bins];
        for &value in values.iter().filter(|v| v.is_finite()) {
            let idx = if bin_width > 0.0 {
                (((value - min) / bin_width).floor() as usize).min(bins - 1)
            } else {
                0
            };
            counts[idx] += 1;
        }

        Some(Self {
            min,
            max,
            bin_width,
            counts,
        })
    }

    /// Number of values binned
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Lower edge of bin `idx`
    pub fn bin_start(&self, idx: usize) -> f64 {
        self.min + self.bin_width * idx as f64
    }
}

/// Pearson correlation between every pair of numeric columns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// Row-major coefficients, `None` where undefined
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Correlate the numeric columns of a table using pairwise complete rows
    pub fn from_table(table: &Table) -> Self {
        let numeric: Vec<(String, Vec<Option<f64>>)> = table
            .columns()
            .iter()
            .filter(|name| table.column_kind(name) == Some(ColumnKind::Numeric))
            .filter_map(|name| {
                let values = table.numeric_column(name)?;
                values
                    .iter()
                    .any(Option::is_some)
                    .then(|| (name.clone(), values))
            })
            .collect();

        let values = numeric
            .iter()
            .map(|(_, xs)| numeric.iter().map(|(_, ys)| pearson(xs, ys)).collect())
            .collect();

        Self {
            columns: numeric.into_iter().map(|(name, _)| name).collect(),
            values,
        }
    }

    /// Coefficient between columns `a` and `b`
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.values[i][j]
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Volume against close for one row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub volume: f64,
    pub close: f64,
}

/// Everything the EDA page shows for one asset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdaReport {
    pub asset: Asset,
    pub close_trend: Vec<TrendPoint>,
    pub close_summary: Option<CloseSummary>,
    pub histogram: Option<Histogram>,
    pub correlation: CorrelationMatrix,
    /// Only present when the table has a `Volume` column
    pub volume_scatter: Option<Vec<ScatterPoint>>,
}

impl EdaReport {
    /// Build the report from a raw price history.
    ///
    /// A table without `Close` gives an empty trend and no histogram.
    pub fn from_prices(asset: Asset, table: &Table) -> Self {
        let closes = finite_values(table, CLOSE);

        Self {
            asset,
            close_trend: close_trend(table),
            close_summary: CloseSummary::from_values(&closes),
            histogram: Histogram::new(&closes, HISTOGRAM_BINS),
            correlation: CorrelationMatrix::from_table(table),
            volume_scatter: volume_scatter(table),
        }
    }
}

/// Dated close prices, skipping rows without a readable date or close
pub fn close_trend(table: &Table) -> Vec<TrendPoint> {
    let (Some(dates), Some(closes)) = (table.column(DATE), table.numeric_column(CLOSE)) else {
        return Vec::new();
    };

    dates
        .zip(closes)
        .filter_map(|(date, close)| {
            Some(TrendPoint {
                date: coerce_date(date).as_timestamp()?,
                close: close.filter(|c| c.is_finite())?,
            })
        })
        .collect()
}

/// Volume/close pairs, `None` when the table has no `Volume` column
pub fn volume_scatter(table: &Table) -> Option<Vec<ScatterPoint>> {
    let volumes = table.numeric_column(VOLUME)?;
    let closes = table.numeric_column(CLOSE).unwrap_or_default();

    Some(
        volumes
            .into_iter()
            .zip(closes)
            .filter_map(|(volume, close)| {
                Some(ScatterPoint {
                    volume: volume?,
                    close: close?,
                })
            })
            .collect(),
    )
}

fn finite_values(table: &Table, column: &str) -> Vec<f64> {
    table
        .numeric_column(column)
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .collect()
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Pearson coefficient over rows where both values are present
fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let (a, b): (Vec<f64>, Vec<f64>) = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .unzip();
    if a.len() < 2 {
        return None;
    }

    let denominator = a.iter().std_dev() * b.iter().std_dev();
    let r = a.iter().covariance(b.iter()) / denominator;
    r.is_finite().then_some(r)
}
