//! In-memory tables read from CSV sources

use crate::error::{ForecastDataError, Result};
use chrono::NaiveDateTime;
use polars::prelude::{DataFrame, DataType, NamedFrom, Series, TimeUnit};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Cell texts read as missing values, the usual CSV null spellings
const MISSING_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A single table cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Empty cell, or a value that could not be coerced
    Missing,
    /// Numeric cell
    Number(f64),
    /// Any other text
    Text(String),
    /// Parsed date/time
    Timestamp(NaiveDateTime),
}

impl Value {
    /// Infer a value from a raw CSV cell
    pub fn from_cell(cell: &str) -> Self {
        let trimmed = cell.trim();
        if MISSING_MARKERS.contains(&trimmed) {
            return Value::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(number) => Value::Number(number),
            Err(_) => Value::Text(cell.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Numeric content, if any
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => Ok(()),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
            Value::Timestamp(ts) if ts.time() == chrono::NaiveTime::MIN => {
                write!(f, "{}", ts.format("%Y-%m-%d"))
            }
            Value::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Storage kind a column resolves to when every present cell agrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnKind {
    /// All present cells are numbers (or the column is entirely missing)
    Numeric,
    /// All present cells are timestamps
    Temporal,
    /// Anything else
    Text,
}

/// An ordered set of rows sharing one ordered set of named columns.
///
/// Every row holds exactly one value per column, and column names are unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create a table from column names and rows
    pub fn new(name: impl Into<String>, columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(ForecastDataError::DataError(format!(
                    "Duplicate column '{}'",
                    column
                )));
            }
        }
        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(ForecastDataError::DataError(format!(
                "Row {} has {} values but the table has {} columns",
                idx,
                row.len(),
                columns.len()
            )));
        }

        Ok(Self {
            name: name.into(),
            columns,
            rows,
        })
    }

    /// Load a table from a CSV file with a header row
    pub fn from_csv<P: AsRef<Path>>(name: &str, path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(name, BufReader::new(file))
    }

    /// Parse CSV with a header row.
    ///
    /// Duplicate header names get `.1`, `.2`, ... suffixes and blank ones become
    /// `Unnamed: <index>`. Short rows are padded with [`Value::Missing`]; a row
    /// with more fields than the header is an error.
    pub fn from_reader<R: Read>(name: &str, reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| ForecastDataError::DataError(format!("Unreadable header: {}", e)))?
            .clone();
        if headers.is_empty() {
            return Err(ForecastDataError::DataError(
                "No columns found in data".to_string(),
            ));
        }
        let columns = unique_column_names(headers.iter());

        let mut rows = Vec::new();
        for (i, record) in csv_reader.records().enumerate() {
            // header is line 1
            let line = i + 2;
            let record = record.map_err(|e| {
                ForecastDataError::DataError(format!("Malformed record at line {}: {}", line, e))
            })?;
            if record.len() > columns.len() {
                return Err(ForecastDataError::DataError(format!(
                    "Line {} has {} fields, expected at most {}",
                    line,
                    record.len(),
                    columns.len()
                )));
            }

            let mut row: Vec<Value> = record.iter().map(Value::from_cell).collect();
            row.resize(columns.len(), Value::Missing);
            rows.push(row);
        }

        Ok(Self {
            name: name.to_string(),
            columns,
            rows,
        })
    }

    /// Dataset name this table was loaded as
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Values of one column, top to bottom
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Value> + Clone + '_> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    /// A column as numbers, with `None` for every non-numeric cell
    pub fn numeric_column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        self.column(name)
            .map(|values| values.map(Value::as_f64).collect())
    }

    /// Value at `row` in column `column`
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    /// Storage kind of a column
    pub fn column_kind(&self, name: &str) -> Option<ColumnKind> {
        self.column(name).map(column_kind)
    }

    /// Rename column `from` to `to`.
    ///
    /// Returns `false` and leaves the table untouched when `from` is absent or
    /// another column is already called `to`.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        if from != to && self.has_column(to) {
            return false;
        }
        match self.column_index(from) {
            Some(idx) => {
                self.columns[idx] = to.to_string();
                true
            }
            None => false,
        }
    }

    /// Replace every value of column `name` with `f(value)`
    pub fn map_column<F>(&mut self, name: &str, mut f: F) -> bool
    where
        F: FnMut(&Value) -> Value,
    {
        let Some(idx) = self.column_index(name) else {
            return false;
        };
        for row in &mut self.rows {
            row[idx] = f(&row[idx]);
        }
        true
    }

    /// First `n` rows
    pub fn head(&self, n: usize) -> Self {
        Self {
            name: self.name.clone(),
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Convert to a polars DataFrame.
    ///
    /// Numeric columns become `Float64`, timestamp columns `Datetime(ms)` and
    /// everything else `Utf8`. Missing values become nulls.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut series = Vec::with_capacity(self.columns.len());
        for (idx, name) in self.columns.iter().enumerate() {
            let values = self.rows.iter().map(|row| &row[idx]);
            let column = match column_kind(values.clone()) {
                ColumnKind::Numeric => {
                    Series::new(name, values.map(Value::as_f64).collect::<Vec<_>>())
                }
                ColumnKind::Temporal => {
                    let millis: Vec<Option<i64>> = values
                        .map(|v| v.as_timestamp().map(|ts| ts.and_utc().timestamp_millis()))
                        .collect();
                    Series::new(name, millis)
                        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
                }
                ColumnKind::Text => {
                    let text: Vec<Option<String>> = values
                        .map(|v| (!v.is_missing()).then(|| v.to_string()))
                        .collect();
                    Series::new(name, text)
                }
            };
            series.push(column);
        }

        Ok(DataFrame::new(series)?)
    }
}

fn column_kind<'a>(mut values: impl Iterator<Item = &'a Value>) -> ColumnKind {
    let mut kind = ColumnKind::Numeric;
    let mut seen_timestamp = false;
    let mut seen_number = false;
    let all_agree = values.all(|value| match value {
        Value::Missing => true,
        Value::Number(_) => {
            seen_number = true;
            !seen_timestamp
        }
        Value::Timestamp(_) => {
            seen_timestamp = true;
            !seen_number
        }
        Value::Text(_) => false,
    });

    if !all_agree {
        kind = ColumnKind::Text;
    } else if seen_timestamp {
        kind = ColumnKind::Temporal;
    }
    kind
}

/// Header names made unique with `.1`, `.2`, ... suffixes on duplicates
fn unique_column_names<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for (idx, header) in headers.enumerate() {
        let base = if header.trim().is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            header.to_string()
        };

        let mut candidate = base.clone();
        let mut suffix = 1;
        while columns.contains(&candidate) {
            candidate = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        columns.push(candidate);
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_inference() {
        assert_eq!(Value::from_cell("42000.5"), Value::Number(42000.5));
        assert_eq!(Value::from_cell(" 17 "), Value::Number(17.0));
        assert_eq!(Value::from_cell(""), Value::Missing);
        assert_eq!(Value::from_cell("NaN"), Value::Missing);
        assert_eq!(
            Value::from_cell("2024-01-01"),
            Value::Text("2024-01-01".to_string())
        );
    }

    #[test]
    fn test_unique_column_names() {
        let names = unique_column_names(["", "Close", "Close", "Close"].into_iter());
        assert_eq!(names, vec!["Unnamed: 0", "Close", "Close.1", "Close.2"]);
    }

    #[test]
    fn test_column_kind() {
        let numbers = [Value::Number(1.0), Value::Missing, Value::Number(2.0)];
        assert_eq!(column_kind(numbers.iter()), ColumnKind::Numeric);

        let mixed = [Value::Number(1.0), Value::Text("x".to_string())];
        assert_eq!(column_kind(mixed.iter()), ColumnKind::Text);

        let empty: [Value; 0] = [];
        assert_eq!(column_kind(empty.iter()), ColumnKind::Numeric);
    }

    #[test]
    fn test_rename_refuses_duplicate_target() {
        let mut table = Table::new(
            "t",
            vec!["a".to_string(), "b".to_string()],
            vec![vec![Value::Number(1.0), Value::Number(2.0)]],
        )
        .unwrap();

        assert!(!table.rename_column("a", "b"));
        assert!(!table.rename_column("missing", "c"));
        assert!(table.rename_column("a", "c"));
        assert_eq!(table.columns(), &["c".to_string(), "b".to_string()]);
    }
}
