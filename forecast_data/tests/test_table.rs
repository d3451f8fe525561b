use forecast_data::normalize::DATE;
use forecast_data::{normalize_forecast, ColumnKind, Table, Value};
use polars::prelude::{DataType, TimeUnit};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_table_from_csv() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Date,Open,High,Low,Close,Volume").unwrap();
    writeln!(file, "2023-01-01,100.0,105.0,98.0,103.0,1000").unwrap();
    writeln!(file, "2023-01-02,103.0,107.0,101.0,106.0,1200").unwrap();
    writeln!(file, "2023-01-03,106.0,110.0,104.0,108.0,1500").unwrap();

    let table = Table::from_csv("btc_prices", file.path()).unwrap();

    assert_eq!(table.name(), "btc_prices");
    assert_eq!(table.len(), 3);
    assert_eq!(table.width(), 6);
    assert!(!table.is_empty());
    assert_eq!(
        table.get(0, "Date"),
        Some(&Value::Text("2023-01-01".to_string()))
    );
    assert_eq!(table.get(2, "Volume"), Some(&Value::Number(1500.0)));
    assert_eq!(table.column_kind("Close"), Some(ColumnKind::Numeric));
    assert_eq!(table.column_kind("Date"), Some(ColumnKind::Text));
}

#[test]
fn test_table_error_handling() {
    assert!(Table::from_csv("missing", "nonexistent_file.csv").is_err());

    let empty = Table::from_reader("empty", "".as_bytes());
    assert!(empty.is_err());

    let too_wide = Table::from_reader("wide", "a,b\n1,2,3\n".as_bytes());
    assert!(too_wide.is_err());
}

#[test]
fn test_null_spellings_keep_column_numeric() {
    let csv = "Date,Close,Volume\n2024-01-01,1.0,#N/A\n2024-01-02,N/A,<NA>\n2024-01-03,NULL,5\n2024-01-04,n/a,-1.#QNAN\n";
    let table = Table::from_reader("prices", csv.as_bytes()).unwrap();

    assert_eq!(table.column_kind("Close"), Some(ColumnKind::Numeric));
    assert_eq!(table.column_kind("Volume"), Some(ColumnKind::Numeric));
    assert_eq!(table.get(1, "Close"), Some(&Value::Missing));
    assert_eq!(table.get(2, "Close"), Some(&Value::Missing));
    assert_eq!(
        table.numeric_column("Close").unwrap(),
        vec![Some(1.0), None, None, None]
    );
}

#[test]
fn test_header_only_table_is_empty() {
    let table = Table::from_reader("header", "Date,Close\n".as_bytes()).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.width(), 2);
}

#[test]
fn test_short_rows_are_padded() {
    let table = Table::from_reader("short", "Date,Close,Volume\n2024-01-01,5\n".as_bytes()).unwrap();

    assert_eq!(table.get(0, "Close"), Some(&Value::Number(5.0)));
    assert_eq!(table.get(0, "Volume"), Some(&Value::Missing));
}

#[test]
fn test_duplicate_and_blank_headers() {
    let table = Table::from_reader("dups", ",Close,Close\n0,1,2\n".as_bytes()).unwrap();

    assert_eq!(table.columns(), &["Unnamed: 0", "Close", "Close.1"]);
    assert_eq!(table.get(0, "Close.1"), Some(&Value::Number(2.0)));
}

#[test]
fn test_new_validates_shape() {
    let columns = vec!["a".to_string(), "b".to_string()];
    assert!(Table::new("ok", columns.clone(), vec![vec![Value::Missing, Value::Missing]]).is_ok());
    assert!(Table::new("ragged", columns, vec![vec![Value::Missing]]).is_err());
    assert!(Table::new(
        "dup",
        vec!["a".to_string(), "a".to_string()],
        Vec::new()
    )
    .is_err());
}

#[test]
fn test_head() {
    let table = Table::from_reader("t", "x\n1\n2\n3\n".as_bytes()).unwrap();
    assert_eq!(table.head(2).len(), 2);
    assert_eq!(table.head(10).len(), 3);
}

#[test]
fn test_to_dataframe_types() {
    let raw = Table::from_reader(
        "btc_arima",
        "Date,Forecast,Note\n2024-01-01,1.5,a\nbad,,b\n".as_bytes(),
    )
    .unwrap();
    let table = normalize_forecast(raw);

    let df = table.to_dataframe().unwrap();

    assert_eq!(df.shape(), (2, 3));
    assert_eq!(
        df.column(DATE).unwrap().dtype(),
        &DataType::Datetime(TimeUnit::Milliseconds, None)
    );
    assert_eq!(df.column("Predicted_Close").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("Predicted_Close").unwrap().null_count(), 1);
    assert_eq!(df.column(DATE).unwrap().null_count(), 1);
    assert_eq!(df.column("Note").unwrap().dtype(), &DataType::Utf8);
}
