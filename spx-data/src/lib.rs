//! Date-range filtering and chart figure building for market data.
//!
//! This crate is the dashboard's reactive handler: given the selected price
//! field and date range it filters the static dataset and describes the two
//! charts to draw. It holds no state between calls.

pub mod figure;

use figure::{Figure, FigurePair};
use spx_core::{DateRange, MarketData, PriceField};

/// Filtering of market rows by date.
pub mod filter {
    use spx_core::{DateRange, MarketRow};

    /// Rows whose date lies within `range` (inclusive), in their original order.
    pub fn filter_rows<'a>(rows: &'a [MarketRow], range: &DateRange) -> Vec<&'a MarketRow> {
        if range.is_inverted() {
            return Vec::new();
        }
        rows.iter().filter(|r| range.contains(&r.date)).collect()
    }

}

/// Recompute both charts for the current control values.
///
/// An empty selection yields two placeholder figures rather than an error.
pub fn update_figures(data: &MarketData, field: PriceField, range: DateRange) -> FigurePair {
    let filtered = filter::filter_rows(data.rows(), &range);
    log::debug!(
        "update_figures: field={} start={:?} end={:?} -> {} rows",
        field,
        range.start,
        range.end,
        filtered.len()
    );

    if filtered.is_empty() {
        return FigurePair {
            line: Figure::placeholder(figure::ChartKind::Line),
            bar: Figure::placeholder(figure::ChartKind::Bar),
        };
    }

    FigurePair {
        line: Figure::price_line(&filtered, field),
        bar: Figure::volume_bars(&filtered),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::figure::{ChartKind, NO_DATA_TITLE};
    use spx_core::MarketRow;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, d).unwrap()
    }

    fn dataset() -> MarketData {
        let rows = (1..=5)
            .map(|d| MarketRow {
                date: day(d),
                open: 3000.0 + d as f64,
                close: 3100.0 + d as f64,
                volume: 1_000_000.0 * d as f64,
            })
            .collect();
        MarketData::from_rows(rows).unwrap()
    }

    #[test]
    fn test_update_figures_example_range() {
        let data = dataset();
        let pair = update_figures(&data, PriceField::Close, DateRange::new(day(2), day(3)));

        let dates: Vec<&str> = pair.line.points.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2020-01-02", "2020-01-03"]);
        assert_eq!(pair.line.points[0].value, 3102.0);
        assert_eq!(pair.line.title, "Evolution of Close over time");
        assert_eq!(pair.line.kind, ChartKind::Line);
        assert!(pair.line.markers);
        assert_eq!(pair.line.color.as_deref(), Some("purple"));

        assert_eq!(pair.bar.kind, ChartKind::Bar);
        assert_eq!(pair.bar.title, "Transaction volume by date");
        assert_eq!(pair.bar.color.as_deref(), Some("orange"));
        assert_eq!(pair.bar.points.len(), 2);
        assert_eq!(pair.bar.points[1].value, 3_000_000.0);
    }

    #[test]
    fn test_update_figures_empty_selection_gives_placeholders() {
        let data = dataset();
        let ranges = [
            DateRange::new(day(6), day(9)),
            DateRange::new(
                NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2019, 12, 31).unwrap(),
            ),
            DateRange::new(day(4), day(2)),
        ];
        for range in ranges {
            let pair = update_figures(&data, PriceField::Open, range);
            assert!(pair.line.is_placeholder());
            assert!(pair.bar.is_placeholder());
            assert_eq!(pair.line.title, NO_DATA_TITLE);
            assert_eq!(pair.bar.title, NO_DATA_TITLE);
            assert_eq!(pair.line.kind, ChartKind::Line);
            assert_eq!(pair.bar.kind, ChartKind::Bar);
        }
    }

    #[test]
    fn test_field_changes_only_line_chart() {
        let data = dataset();
        let range = data.full_range();
        let open = update_figures(&data, PriceField::Open, range);
        let close = update_figures(&data, PriceField::Close, range);

        assert_eq!(open.bar, close.bar);
        assert_ne!(open.line.title, close.line.title);
        assert_eq!(open.line.title, "Evolution of Open over time");
        assert_eq!(open.line.y_label, "Open");
        assert_eq!(close.line.y_label, "Close");

        let open_dates: Vec<&String> = open.line.points.iter().map(|p| &p.date).collect();
        let close_dates: Vec<&String> = close.line.points.iter().map(|p| &p.date).collect();
        assert_eq!(open_dates, close_dates);
        assert!(open.line.points.iter().zip(&close.line.points).all(|(o, c)| o.value != c.value));
        assert_eq!(open.line.color, close.line.color);
    }

    #[test]
    fn test_full_range_round_trip() {
        let data = dataset();
        let pair = update_figures(&data, PriceField::Open, data.full_range());
        assert_eq!(pair.line.points.len(), data.len());
        assert_eq!(pair.bar.points.len(), data.len());
        for ((row, line), bar) in data.rows().iter().zip(&pair.line.points).zip(&pair.bar.points) {
            assert_eq!(line.value, row.open);
            assert_eq!(bar.value, row.volume);
        }
    }
}
