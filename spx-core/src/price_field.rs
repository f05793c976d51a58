use crate::error::SpxError;
use crate::market_row::MarketRow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The price column plotted on the line chart.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum PriceField {
    Open,
    #[default]
    Close,
}

impl PriceField {
    /// All selectable fields, in dropdown order.
    pub const ALL: [PriceField; 2] = [PriceField::Open, PriceField::Close];

    /// Column name as it appears in the CSV header and in chart titles.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceField::Open => "Open",
            PriceField::Close => "Close",
        }
    }

    /// Human readable label for the dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            PriceField::Open => "Opening Price",
            PriceField::Close => "Closing Price",
        }
    }

    /// Read this field's value out of a row.
    pub fn value_of(&self, row: &MarketRow) -> f64 {
        match self {
            PriceField::Open => row.open,
            PriceField::Close => row.close,
        }
    }
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceField {
    type Err = SpxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Open" => Ok(PriceField::Open),
            "Close" => Ok(PriceField::Close),
            other => Err(SpxError::UnknownField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PriceField;
    use chrono::NaiveDate;
    use crate::market_row::MarketRow;

    #[test]
    fn test_parse_known_fields() {
        assert_eq!("Open".parse::<PriceField>().unwrap(), PriceField::Open);
        assert_eq!("Close".parse::<PriceField>().unwrap(), PriceField::Close);
        assert_eq!(" Close ".parse::<PriceField>().unwrap(), PriceField::Close);
    }

    #[test]
    fn test_parse_rejects_other_columns() {
        assert!("Volume".parse::<PriceField>().is_err());
        assert!("close".parse::<PriceField>().is_err());
        assert!("".parse::<PriceField>().is_err());
    }

    #[test]
    fn test_default_is_close() {
        assert_eq!(PriceField::default(), PriceField::Close);
    }

    #[test]
    fn test_value_of_selects_column() {
        let row = MarketRow {
            date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            open: 3244.67,
            close: 3257.85,
            volume: 3_458_250_000.0,
        };
        assert_eq!(PriceField::Open.value_of(&row), 3244.67);
        assert_eq!(PriceField::Close.value_of(&row), 3257.85);
    }

    #[test]
    fn test_display_matches_column_name() {
        for field in PriceField::ALL {
            assert_eq!(field.to_string(), field.as_str());
            assert_eq!(field.as_str().parse::<PriceField>().unwrap(), field);
        }
    }
}
