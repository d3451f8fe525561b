use chrono::NaiveDate;
use forecast_data::normalize::{ACTUAL, CLOSE, DATE, PREDICTED_CLOSE};
use forecast_data::{normalize_forecast, normalize_forecast_in_place, Table, Value};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn table(csv: &str) -> Table {
    Table::from_reader("fixture", csv.as_bytes()).unwrap()
}

fn columns(table: &Table) -> Vec<&str> {
    table.columns().iter().map(String::as_str).collect()
}

#[rstest]
#[case("Forecast")]
#[case("Predicted")]
#[case("yhat")]
#[case("y_pred")]
fn test_synonym_becomes_predicted_close(#[case] synonym: &str) {
    let raw = table(&format!("Date,{}\n2024-01-01,1.5\n2024-01-02,2.5\n", synonym));
    let before = raw.numeric_column(synonym).unwrap();

    let normalized = normalize_forecast(raw);

    assert!(!normalized.has_column(synonym));
    assert_eq!(normalized.numeric_column(PREDICTED_CLOSE).unwrap(), before);
}

#[rstest]
#[case("Forecast,yhat", "Forecast", "yhat")]
#[case("yhat,Forecast", "Forecast", "yhat")]
#[case("y_pred,Predicted", "Predicted", "y_pred")]
#[case("yhat,y_pred", "yhat", "y_pred")]
fn test_first_synonym_in_priority_order_wins(
    #[case] header: &str,
    #[case] winner: &str,
    #[case] survivor: &str,
) {
    let names: Vec<&str> = header.split(',').collect();
    let raw = table(&format!("{}\n10,20\n", header));
    let winner_idx = names.iter().position(|n| *n == winner).unwrap();
    let expected = if winner_idx == 0 { 10.0 } else { 20.0 };
    let survivor_before = raw.numeric_column(survivor).unwrap();

    let mut normalized = raw;
    let summary = normalize_forecast_in_place(&mut normalized);

    assert_eq!(summary.prediction_source, Some(winner));
    assert_eq!(
        normalized.get(0, PREDICTED_CLOSE),
        Some(&Value::Number(expected))
    );
    assert_eq!(normalized.numeric_column(survivor).unwrap(), survivor_before);
    assert_eq!(
        normalized
            .columns()
            .iter()
            .filter(|c| c.as_str() == PREDICTED_CLOSE)
            .count(),
        1
    );
}

#[test]
fn test_close_becomes_actual() {
    let raw = table("Date,Predicted_Close,Close\n2024-01-01,1.0,2.0\n");
    let normalized = normalize_forecast(raw);

    assert!(!normalized.has_column(CLOSE));
    assert_eq!(normalized.get(0, ACTUAL), Some(&Value::Number(2.0)));
}

#[test]
fn test_existing_actual_is_not_overwritten() {
    let raw = table("Date,Actual,Close\n2024-01-01,1.0,2.0\n");
    let mut normalized = raw.clone();
    let summary = normalize_forecast_in_place(&mut normalized);

    assert!(!summary.actual_from_close);
    assert_eq!(columns(&normalized), vec![DATE, ACTUAL, CLOSE]);
    assert_eq!(normalized.get(0, ACTUAL), Some(&Value::Number(1.0)));
    assert_eq!(normalized.get(0, CLOSE), Some(&Value::Number(2.0)));
}

#[test]
fn test_existing_predicted_close_blocks_synonyms() {
    let raw = table("Predicted_Close,yhat\n1.0,2.0\n");
    let mut normalized = raw.clone();
    let summary = normalize_forecast_in_place(&mut normalized);

    assert_eq!(summary.prediction_source, None);
    assert_eq!(normalized, raw);
}

#[test]
fn test_normalization_is_idempotent() {
    let raw = table(
        "Date,Forecast,yhat,Close,Volume\n\
         2024-01-01,1.0,1.1,0.9,100\n\
         garbage,2.0,2.1,1.9,200\n\
         2024-01-03,,3.1,2.9,\n",
    );

    let once = normalize_forecast(raw);
    let twice = normalize_forecast(once.clone());

    assert_eq!(twice, once);
    assert_eq!(
        serde_json::to_string(&twice).unwrap(),
        serde_json::to_string(&once).unwrap()
    );
}

#[test]
fn test_malformed_date_becomes_missing() {
    let raw = table("Date,yhat\n2024-01-01,1.0\nnot-a-date,2.0\n2024-01-03,3.0\n");
    let mut normalized = raw;
    let summary = normalize_forecast_in_place(&mut normalized);

    assert_eq!(summary.parsed_dates, 2);
    assert_eq!(summary.invalid_dates, 1);
    assert_eq!(normalized.len(), 3);
    assert_eq!(normalized.get(1, DATE), Some(&Value::Missing));
    assert_eq!(normalized.get(1, PREDICTED_CLOSE), Some(&Value::Number(2.0)));

    let expected = NaiveDate::from_ymd_opt(2024, 1, 3)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(normalized.get(2, DATE), Some(&Value::Timestamp(expected)));
}

#[test]
fn test_worked_example() {
    let raw = table("Date,yhat,Close\n2024-01-01,42000.5,41950.0\n");
    let normalized = normalize_forecast(raw);

    let date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(columns(&normalized), vec![DATE, PREDICTED_CLOSE, ACTUAL]);
    assert_eq!(
        normalized.rows(),
        &[vec![
            Value::Timestamp(date),
            Value::Number(42000.5),
            Value::Number(41950.0)
        ]]
    );
}

#[test]
fn test_table_without_canonical_columns_is_valid() {
    let raw = table("ds,yhat_lower,yhat_upper\n2024-01-01,1.0,2.0\n");
    let mut normalized = raw.clone();
    let summary = normalize_forecast_in_place(&mut normalized);

    assert_eq!(summary.prediction_source, None);
    assert!(!summary.actual_from_close);
    assert_eq!(normalized, raw);
}

#[test]
fn test_row_order_and_other_columns_untouched() {
    let raw = table("Volume,Date,Forecast\n3,2024-01-03,30\n1,2024-01-01,10\n");
    let normalized = normalize_forecast(raw.clone());

    assert_eq!(columns(&normalized), vec!["Volume", DATE, PREDICTED_CLOSE]);
    assert_eq!(normalized.numeric_column("Volume"), raw.numeric_column("Volume"));
    assert_eq!(
        normalized.numeric_column(PREDICTED_CLOSE).unwrap(),
        vec![Some(30.0), Some(10.0)]
    );
}
