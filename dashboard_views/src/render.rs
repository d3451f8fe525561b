//! Plain-text and JSON rendering of page content

use crate::data_view::DataView;
use crate::eda::{CorrelationMatrix, EdaReport, Histogram};
use crate::error::Result;
use crate::forecast_view::ForecastPage;
use crate::overview::Overview;
use crate::page::PageContent;
use forecast_data::{Table, Value};
use std::fmt::Write;

/// Widest histogram bar in characters
const BAR_WIDTH: usize = 40;

/// Render a page as terminal text
pub fn render_text(content: &PageContent) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", content.page().title())?;
    writeln!(out, "{}", "=".repeat(content.page().title().len()))?;

    match content {
        PageContent::Overview(overview) => render_overview(&mut out, overview)?,
        PageContent::DataView(view) => render_data_view(&mut out, view)?,
        PageContent::Eda(report) => render_eda(&mut out, report)?,
        PageContent::Forecasts(page) => render_forecasts(&mut out, page)?,
        PageContent::ModelEvaluation(table) => render_table(&mut out, table)?,
    }
    Ok(out)
}

/// Render a page as pretty-printed JSON
pub fn render_json(content: &PageContent) -> Result<String> {
    Ok(serde_json::to_string_pretty(content)?)
}

/// Write a table through the polars DataFrame display
pub fn render_table(out: &mut String, table: &Table) -> Result<()> {
    let df = table.to_dataframe()?;
    writeln!(out, "{}", df)?;
    Ok(())
}

fn render_overview(out: &mut String, overview: &Overview) -> Result<()> {
    let coins: Vec<&str> = overview.coins.iter().map(|c| c.symbol()).collect();
    let models: Vec<&str> = overview.models.iter().map(|m| m.name()).collect();

    writeln!(out, "Project: {}", overview.project)?;
    writeln!(out, "Dataset Source: {}", overview.data_source)?;
    writeln!(out, "Coins Analyzed: {}", coins.join(", "))?;
    writeln!(out, "Models: {}", models.join(", "))?;
    writeln!(out)?;
    writeln!(out, "Work Done So Far:")?;
    for (stage, detail) in &overview.work_done {
        writeln!(out, "  {}: {}", stage, detail)?;
    }
    writeln!(out)?;
    writeln!(out, "Model Evaluation: {}", overview.evaluation)?;
    Ok(())
}

fn render_data_view(out: &mut String, view: &DataView) -> Result<()> {
    writeln!(
        out,
        "{}: first {} of {} rows",
        view.asset,
        view.preview.len(),
        view.total_rows
    )?;
    render_table(out, &view.preview)
}

fn render_eda(out: &mut String, report: &EdaReport) -> Result<()> {
    writeln!(out, "Asset: {}", report.asset)?;
    writeln!(out)?;

    writeln!(out, "Closing Price Trend")?;
    match (report.close_trend.first(), report.close_trend.last()) {
        (Some(first), Some(last)) => writeln!(
            out,
            "  {} points, {} ({:.4}) to {} ({:.4})",
            report.close_trend.len(),
            first.date.date(),
            first.close,
            last.date.date(),
            last.close
        )?,
        _ => writeln!(out, "  No dated close prices")?,
    }
    if let Some(summary) = &report.close_summary {
        writeln!(
            out,
            "  mean {:.4}, std {:.4}, min {:.4}, max {:.4}",
            summary.mean, summary.std_dev, summary.min, summary.max
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Price Distribution")?;
    match &report.histogram {
        Some(histogram) => render_histogram(out, histogram)?,
        None => writeln!(out, "  No close prices")?,
    }
    writeln!(out)?;

    writeln!(out, "Correlation Heatmap")?;
    if report.correlation.is_empty() {
        writeln!(out, "  No numeric columns")?;
    } else {
        render_table(out, &correlation_table(&report.correlation)?)?;
    }

    if let Some(points) = &report.volume_scatter {
        writeln!(out)?;
        writeln!(out, "Volume vs Price Scatter")?;
        writeln!(out, "  {} points", points.len())?;
    }
    Ok(())
}

fn render_histogram(out: &mut String, histogram: &Histogram) -> Result<()> {
    let peak = histogram.counts.iter().copied().max().unwrap_or(0).max(1);
    for (idx, &count) in histogram.counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let bar = "#".repeat((count * BAR_WIDTH).div_ceil(peak));
        writeln!(
            out,
            "  {:>14.4} | {:<width$} {}",
            histogram.bin_start(idx),
            bar,
            count,
            width = BAR_WIDTH
        )?;
    }
    Ok(())
}

fn correlation_table(matrix: &CorrelationMatrix) -> Result<Table> {
    let mut columns = vec!["column".to_string()];
    columns.extend(matrix.columns.iter().cloned());

    let rows: Vec<Vec<Value>> = matrix
        .columns
        .iter()
        .zip(&matrix.values)
        .map(|(name, coefficients)| {
            std::iter::once(Value::Text(name.clone()))
                .chain(
                    coefficients
                        .iter()
                        .map(|c| c.map_or(Value::Missing, Value::Number)),
                )
                .collect::<Vec<_>>()
        })
        .collect();

    Ok(Table::new("correlation", columns, rows)?)
}

fn render_forecasts(out: &mut String, page: &ForecastPage) -> Result<()> {
    writeln!(out, "{} / {}", page.asset, page.model)?;
    render_table(out, &page.preview)?;
    writeln!(out)?;

    match page.chart.title() {
        Some(title) => {
            writeln!(out, "{}", title)?;
            writeln!(out, "  {} dated points", page.chart.points().len())?;
        }
        None => {
            if let Some(warning) = page.chart.warning() {
                writeln!(out, "WARNING: {}", warning)?;
            }
        }
    }
    Ok(())
}
