/// Error types for the SPX library
use thiserror::Error;

/// Main error type for loading and querying market data
#[derive(Error, Debug)]
pub enum SpxError {
    /// The data file could not be opened or read
    #[error("Failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required column is absent from the header
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A `Date` cell could not be coerced to a calendar date
    #[error("Failed to parse date {value:?} on line {line}")]
    DateParse { line: u64, value: String },

    /// The file has a header but no data rows
    #[error("Dataset contains no rows")]
    EmptyDataset,

    /// A field name outside the selectable price fields
    #[error("Unknown price field: {0}")]
    UnknownField(String),
}

/// Type alias for Results using SpxError
pub type Result<T> = std::result::Result<T, SpxError>;
