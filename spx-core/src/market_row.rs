use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column names the loader requires in the CSV header.
pub const DATE_COLUMN: &str = "Date";
pub const OPEN_COLUMN: &str = "Open";
pub const CLOSE_COLUMN: &str = "Close";
pub const VOLUME_COLUMN: &str = "Volume";

/// One dated market data record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRow {
    pub date: NaiveDate,
    pub open: f64,
    pub close: f64,
    pub volume: f64,
}
