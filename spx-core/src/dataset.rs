//! The in-memory market data table.
//!
//! Loaded once from CSV and never mutated. Rows keep file order; the loader
//! does not sort or de-duplicate dates.
//!
//! # CSV Format
//!
//! Header required, must include `Date,Open,Close,Volume` (any order). Extra
//! columns such as `High`, `Low` or `Adj Close` are ignored.
//!
//! ```text
//! Date,Open,High,Low,Close,Adj Close,Volume
//! 2020-01-02,3244.67,3258.14,3235.53,3257.85,3257.85,3458250000
//! ```

use crate::date_range::DateRange;
use crate::error::{Result, SpxError};
use crate::market_row::{MarketRow, CLOSE_COLUMN, DATE_COLUMN, OPEN_COLUMN, VOLUME_COLUMN};
use chrono::NaiveDate;
use csv::StringRecord;
use spx_utils::dates::parse_csv_date;
use std::path::Path;

/// Immutable, file-ordered sequence of market rows.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketData {
    rows: Vec<MarketRow>,
    min_date: NaiveDate,
    max_date: NaiveDate,
}

/// Positions of the required columns within a CSV record.
struct ColumnIndex {
    date: usize,
    open: usize,
    close: usize,
    volume: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| SpxError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            date: find(DATE_COLUMN)?,
            open: find(OPEN_COLUMN)?,
            close: find(CLOSE_COLUMN)?,
            volume: find(VOLUME_COLUMN)?,
        })
    }
}

impl MarketData {
    /// Build a dataset from already-parsed rows.
    pub fn from_rows(rows: Vec<MarketRow>) -> Result<Self> {
        let min_date = rows.iter().map(|r| r.date).min().ok_or(SpxError::EmptyDataset)?;
        let max_date = rows.iter().map(|r| r.date).max().ok_or(SpxError::EmptyDataset)?;
        Ok(Self {
            rows,
            min_date,
            max_date,
        })
    }

    /// Parse market data from a CSV string.
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Read and parse market data from a CSV file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let data = Self::from_reader(file)?;
        log::info!(
            "Loaded {} rows from {} ({} to {})",
            data.len(),
            path.display(),
            data.min_date,
            data.max_date
        );
        Ok(data)
    }

    fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnIndex::from_headers(rdr.headers()?)?;

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            let date_str = record.get(columns.date).unwrap_or("");
            let date = parse_csv_date(date_str).ok_or_else(|| SpxError::DateParse {
                line,
                value: date_str.to_string(),
            })?;

            rows.push(MarketRow {
                date,
                open: parse_number(&record, columns.open, OPEN_COLUMN, line),
                close: parse_number(&record, columns.close, CLOSE_COLUMN, line),
                volume: parse_number(&record, columns.volume, VOLUME_COLUMN, line),
            });
        }
        log::debug!("dataset: parsed {} rows", rows.len());

        Self::from_rows(rows)
    }

    /// All rows in file order.
    pub fn rows(&self) -> &[MarketRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Earliest date present in the data.
    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    /// Latest date present in the data.
    pub fn max_date(&self) -> NaiveDate {
        self.max_date
    }

    /// The closed range spanning every row.
    pub fn full_range(&self) -> DateRange {
        DateRange::new(self.min_date, self.max_date)
    }
}

/// Numeric cells are coerced, not validated: blanks and non-numbers become NaN.
fn parse_number(record: &StringRecord, idx: usize, column: &str, line: u64) -> f64 {
    let raw = record.get(idx).unwrap_or("").trim();
    raw.parse::<f64>().unwrap_or_else(|_| {
        log::debug!("dataset: line {line} column {column}: {raw:?} is not a number");
        f64::NAN
    })
}
