//! Core types and CSV loader for S&P 500 market data.
//!
//! - `dataset`: the immutable, file-ordered `MarketData` table
//! - `market_row`: one dated record (open, close, volume)
//! - `price_field`: the selectable price column
//! - `date_range`: inclusive, optionally open-ended date bounds

pub mod dataset;
pub mod date_range;
pub mod error;
pub mod market_row;
pub mod price_field;

pub use dataset::MarketData;
pub use date_range::DateRange;
pub use error::{Result, SpxError};
pub use market_row::MarketRow;
pub use price_field::PriceField;
