//! Column normalization for forecast tables
//!
//! Forecast exports disagree on column names. Normalizing a table gives it the
//! columns the dashboard reads:
//!
//! - `Date` values coerced to timestamps, unparseable ones becoming missing
//! - the first prediction column found among `Forecast`, `Predicted`, `yhat`
//!   and `y_pred` (in that order) renamed to `Predicted_Close`
//! - `Close` renamed to `Actual` when there is no `Actual` column
//!
//! Rows are never added, removed or reordered, and other columns are left
//! alone. Normalizing an already normalized table changes nothing.

use crate::table::{Table, Value};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Date column name
pub const DATE: &str = "Date";
/// Canonical prediction column name
pub const PREDICTED_CLOSE: &str = "Predicted_Close";
/// Canonical observed-price column name
pub const ACTUAL: &str = "Actual";
/// Observed-price column name in raw exports
pub const CLOSE: &str = "Close";

/// Prediction column renames, highest priority first. Only the first present
/// source column is renamed.
pub const PREDICTION_RENAMES: [(&str, &str); 4] = [
    ("Forecast", PREDICTED_CLOSE),
    ("Predicted", PREDICTED_CLOSE),
    ("yhat", PREDICTED_CLOSE),
    ("y_pred", PREDICTED_CLOSE),
];

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%#z"];

const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// What normalizing one table changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    /// `Date` cells holding a timestamp afterwards
    pub parsed_dates: usize,
    /// Non-empty `Date` cells that could not be parsed and are now missing
    pub invalid_dates: usize,
    /// Column renamed to `Predicted_Close`, if any
    pub prediction_source: Option<&'static str>,
    /// Whether `Close` was renamed to `Actual`
    pub actual_from_close: bool,
}

/// Normalize a forecast table, returning the normalized table
pub fn normalize_forecast(mut table: Table) -> Table {
    normalize_forecast_in_place(&mut table);
    table
}

/// Normalize a forecast table in place
pub fn normalize_forecast_in_place(table: &mut Table) -> NormalizeSummary {
    let mut summary = NormalizeSummary::default();

    table.map_column(DATE, |value| {
        let coerced = coerce_date(value);
        if coerced.as_timestamp().is_some() {
            summary.parsed_dates += 1;
        } else if !value.is_missing() {
            summary.invalid_dates += 1;
        }
        coerced
    });

    // an existing canonical column wins over every synonym
    if !table.has_column(PREDICTED_CLOSE) {
        if let Some(&(from, to)) = PREDICTION_RENAMES
            .iter()
            .find(|(from, _)| table.has_column(from))
        {
            table.rename_column(from, to);
            summary.prediction_source = Some(from);
        }
    }

    if !table.has_column(ACTUAL) && table.has_column(CLOSE) {
        summary.actual_from_close = table.rename_column(CLOSE, ACTUAL);
    }

    debug!(
        table = table.name(),
        parsed_dates = summary.parsed_dates,
        invalid_dates = summary.invalid_dates,
        prediction_source = ?summary.prediction_source,
        actual_from_close = summary.actual_from_close,
        "Normalized forecast table"
    );

    summary
}

/// Coerce one `Date` cell to a timestamp, or to missing when it cannot be read.
///
/// Numeric cells are read as compact `YYYYMMDD` dates, never as epoch offsets,
/// so `1704412800` becomes missing rather than 2024-01-05.
pub fn coerce_date(value: &Value) -> Value {
    let parsed = match value {
        Value::Timestamp(ts) => Some(*ts),
        Value::Text(text) => parse_timestamp(text),
        Value::Number(n) => compact_date(*n),
        Value::Missing => None,
    };
    parsed.map_or(Value::Missing, Value::Timestamp)
}

/// Parse a date or date-time string.
///
/// Offset-qualified inputs are converted to UTC. Date-only inputs map to
/// midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.naive_utc());
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ts);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Integral `YYYYMMDD` numbers, as produced when a date column was read as numeric
fn compact_date(n: f64) -> Option<NaiveDateTime> {
    if n.fract() != 0.0 || !(10_000_101.0..=99_991_231.0).contains(&n) {
        return None;
    }
    let n = n as i64;
    let (year, month, day) = (n / 10_000, (n / 100) % 100, n % 100);
    NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
