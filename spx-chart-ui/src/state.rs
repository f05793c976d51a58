//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Dates are held as `YYYY-MM-DD` strings, the value format of `<input type="date">`.

use chrono::NaiveDate;
use dioxus::prelude::*;
use spx_core::{DateRange, MarketData, PriceField};
use spx_utils::dates::{format_date, parse_picker_date};

/// Shared state for the dashboard controls.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the dataset is still being parsed
    pub loading: Signal<bool>,
    /// Fatal load error, shown instead of the controls
    pub error_msg: Signal<Option<String>>,
    /// Price field plotted on the line chart
    pub selected_field: Signal<PriceField>,
    /// Start of the selected date range
    pub start_date: Signal<String>,
    /// End of the selected date range
    pub end_date: Signal<String>,
    /// Earliest date the picker allows
    pub min_date: Signal<String>,
    /// Latest date the picker allows
    pub max_date: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_field: Signal::new(PriceField::default()),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            min_date: Signal::new(String::new()),
            max_date: Signal::new(String::new()),
        }
    }

    /// Bound the picker to the dataset and select its full range.
    pub fn reset_range(&mut self, data: &MarketData) {
        let (min, max) = picker_limits(data);
        self.min_date.set(min.clone());
        self.max_date.set(max.clone());
        self.start_date.set(min);
        self.end_date.set(max);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// `(min, max)` picker values covering every row of `data`.
pub fn picker_limits(data: &MarketData) -> (String, String) {
    (format_date(&data.min_date()), format_date(&data.max_date()))
}

/// An empty picker value leaves that side of the range open; an
/// unparseable one is logged and treated the same way.
pub fn picker_bound(value: &str) -> Option<NaiveDate> {
    if value.trim().is_empty() {
        return None;
    }
    match parse_picker_date(value) {
        Ok(date) => Some(date),
        Err(e) => {
            log::warn!("ignoring unparseable date {value:?}: {e}");
            None
        }
    }
}

/// Filter range for the current picker values.
pub fn picker_range(start: &str, end: &str) -> DateRange {
    DateRange::bounded(picker_bound(start), picker_bound(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, d).unwrap()
    }

    #[test]
    fn picker_limits_span_unsorted_data() {
        let csv = "Date,Open,Close,Volume\n2020-01-03,1,1,1\n2020-01-01,1,1,1\n2020-01-05,1,1,1\n";
        let data = MarketData::from_csv_str(csv).unwrap();
        assert_eq!(
            picker_limits(&data),
            ("2020-01-01".to_string(), "2020-01-05".to_string())
        );
    }

    #[test]
    fn picker_bound_empty_is_open() {
        assert_eq!(picker_bound(""), None);
        assert_eq!(picker_bound("   "), None);
    }

    #[test]
    fn picker_bound_ignores_garbage() {
        assert_eq!(picker_bound("01/02/2020x"), None);
        assert_eq!(picker_bound("2020-13-01"), None);
    }

    #[test]
    fn picker_bound_parses_dates() {
        assert_eq!(picker_bound("2020-01-02"), Some(day(2)));
        assert_eq!(picker_bound("2020-01-02T00:00:00"), Some(day(2)));
    }

    #[test]
    fn picker_range_mixes_open_and_closed_sides() {
        let range = picker_range("2020-01-02", "");
        assert_eq!(range, DateRange::bounded(Some(day(2)), None));
        assert!(range.contains(&day(31)));
        assert!(!range.contains(&day(1)));
        assert_eq!(picker_range("", ""), DateRange::default());
    }
}
