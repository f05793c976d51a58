//! Headless commands: dataset summary and figure JSON.

use anyhow::Context;
use chrono::NaiveDate;
use spx_core::{DateRange, MarketData, PriceField};
use spx_utils::dates::{format_date, parse_picker_date};
use std::path::Path;

fn load(csv: &Path) -> anyhow::Result<MarketData> {
    MarketData::from_path(csv).with_context(|| format!("loading {}", csv.display()))
}

/// Parse an optional date argument; `None` or blank leaves the bound open.
pub fn parse_bound(value: Option<&str>) -> anyhow::Result<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_picker_date(s)
            .map(Some)
            .with_context(|| format!("invalid date {s:?}, expected YYYY-MM-DD")),
    }
}

/// One-line description of a dataset.
pub fn summary_text(data: &MarketData) -> String {
    format!(
        "{} rows from {} to {}",
        data.len(),
        format_date(&data.min_date()),
        format_date(&data.max_date())
    )
}

/// Pretty JSON `{ "line": ..., "bar": ... }` for the given controls.
pub fn figures_json(
    data: &MarketData,
    field: PriceField,
    start: Option<&str>,
    end: Option<&str>,
) -> anyhow::Result<String> {
    let range = DateRange::bounded(parse_bound(start)?, parse_bound(end)?);
    let figures = spx_data::update_figures(data, field, range);
    Ok(serde_json::to_string_pretty(&figures)?)
}

pub fn run_summary(csv: &Path) -> anyhow::Result<()> {
    let data = load(csv)?;
    println!("{}", summary_text(&data));
    Ok(())
}

pub fn run_figures(
    csv: &Path,
    field: PriceField,
    start: Option<&str>,
    end: Option<&str>,
) -> anyhow::Result<()> {
    let data = load(csv)?;
    println!("{}", figures_json(&data, field, start, end)?);
    Ok(())
}
