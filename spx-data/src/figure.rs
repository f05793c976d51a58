//! Serializable chart descriptions.
//!
//! A `Figure` carries everything the D3.js renderers (and HTTP clients) need
//! to draw one chart: kind, title, axis labels, colour and the (date, value)
//! points. Dates are emitted as `YYYY-MM-DD` strings.

use serde::Serialize;
use spx_core::{MarketRow, PriceField};
use spx_utils::dates::format_date;

/// Title shown on both charts when the selected range matches no rows.
pub const NO_DATA_TITLE: &str = "no data available for selected dates.";

/// Title of the volume bar chart.
pub const VOLUME_TITLE: &str = "Transaction volume by date";

pub const LINE_COLOR: &str = "purple";
pub const BAR_COLOR: &str = "orange";

const DATE_LABEL: &str = "Date";
const VOLUME_LABEL: &str = "Volume";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// A single (date, value) pair.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatePoint {
    pub date: String,
    pub value: f64,
}

/// One chart, ready to be serialized to JSON.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    pub kind: ChartKind,
    pub title: String,
    /// Empty for placeholders.
    pub x_label: String,
    pub y_label: String,
    /// Trace colour; `None` leaves the renderer default.
    pub color: Option<String>,
    /// Draw a marker at each point (line charts only).
    pub markers: bool,
    /// Missing source values are NaN and serialize as `null`.
    pub points: Vec<DatePoint>,
}

/// The two linked charts produced for one set of control values.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FigurePair {
    pub line: Figure,
    pub bar: Figure,
}

impl Figure {
    /// Empty chart carrying only the "no data" title.
    pub fn placeholder(kind: ChartKind) -> Self {
        Self {
            kind,
            title: NO_DATA_TITLE.to_string(),
            x_label: String::new(),
            y_label: String::new(),
            color: None,
            markers: false,
            points: Vec::new(),
        }
    }

    /// Line chart of `field` over time with connected markers.
    pub fn price_line(rows: &[&MarketRow], field: PriceField) -> Self {
        Self {
            kind: ChartKind::Line,
            title: format!("Evolution of {} over time", field),
            x_label: DATE_LABEL.to_string(),
            y_label: field.as_str().to_string(),
            color: Some(LINE_COLOR.to_string()),
            markers: true,
            points: rows
                .iter()
                .map(|r| DatePoint {
                    date: format_date(&r.date),
                    value: field.value_of(r),
                })
                .collect(),
        }
    }

    /// Bar chart of traded volume per date.
    pub fn volume_bars(rows: &[&MarketRow]) -> Self {
        Self {
            kind: ChartKind::Bar,
            title: VOLUME_TITLE.to_string(),
            x_label: DATE_LABEL.to_string(),
            y_label: VOLUME_LABEL.to_string(),
            color: Some(BAR_COLOR.to_string()),
            markers: false,
            points: rows
                .iter()
                .map(|r| DatePoint {
                    date: format_date(&r.date),
                    value: r.volume,
                })
                .collect(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.points.is_empty()
    }

    /// Compact JSON of the whole figure.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row() -> MarketRow {
        MarketRow {
            date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            open: 3244.67,
            close: 3257.85,
            volume: 3458250000.0,
        }
    }

    #[test]
    fn placeholder_has_no_points_or_colour() {
        let fig = Figure::placeholder(ChartKind::Bar);
        assert!(fig.is_placeholder());
        assert_eq!(fig.title, NO_DATA_TITLE);
        assert!(fig.color.is_none());
        assert!(!fig.markers);
    }

    #[test]
    fn figure_serializes_for_d3() {
        let r = row();
        let fig = Figure::price_line(&[&r], PriceField::Open);
        let value: serde_json::Value = serde_json::from_str(&fig.to_json()).unwrap();
        assert_eq!(value["kind"], "line");
        assert_eq!(value["title"], "Evolution of Open over time");
        assert_eq!(value["color"], "purple");
        assert_eq!(value["markers"], true);
        assert_eq!(value["x_label"], "Date");
        assert_eq!(value["points"][0]["date"], "2020-01-02");
        assert_eq!(value["points"][0]["value"], 3244.67);
    }

    #[test]
    fn volume_bars_use_volume_column() {
        let r = row();
        let fig = Figure::volume_bars(&[&r]);
        assert_eq!(fig.kind, ChartKind::Bar);
        assert_eq!(fig.y_label, "Volume");
        assert_eq!(fig.points[0].value, 3458250000.0);
        assert!(!fig.markers);
    }

    #[test]
    fn missing_values_serialize_as_null() {
        let mut r = row();
        r.volume = f64::NAN;
        let fig = Figure::volume_bars(&[&r]);
        let value: serde_json::Value = serde_json::from_str(&fig.to_json()).unwrap();
        assert!(value["points"][0]["value"].is_null());
        assert_eq!(value["points"][0]["date"], "2020-01-02");
    }
}
