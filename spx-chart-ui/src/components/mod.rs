//! Reusable Dioxus RSX components for the SPX dashboard.

mod chart_container;
mod date_range_picker;
mod field_selector;
mod load_status;

pub use chart_container::ChartContainer;
pub use date_range_picker::DateRangePicker;
pub use field_selector::FieldSelector;
pub use load_status::LoadStatus;
