//! Shared utility functions for SPX crates.

/// Date utility functions
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Canonical date format used for display, JSON and date inputs.
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Date formats accepted in the `Date` column of market data CSVs.
    const CSV_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

    /// Datetime formats accepted in the `Date` column; the time part is dropped.
    const CSV_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
    }

    /// Parse a value coming from a date picker or query string.
    ///
    /// Browsers send plain "YYYY-MM-DD"; some clients append a time
    /// ("2020-01-02T00:00:00"), which is ignored.
    pub fn parse_picker_date(s: &str) -> anyhow::Result<NaiveDate> {
        let s = s.trim();
        let date_part = s.split(['T', ' ']).next().unwrap_or(s);
        parse_date(date_part)
    }

    /// Parse a `Date` cell from a market data CSV.
    ///
    /// Returns `None` when no accepted format matches.
    pub fn parse_csv_date(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        CSV_DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
            .or_else(|| {
                CSV_DATETIME_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                    .map(|dt| dt.date())
            })
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_picker_date_strips_time() {
            let expected = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
            assert_eq!(parse_picker_date("2020-01-02").unwrap(), expected);
            assert_eq!(parse_picker_date("2020-01-02T00:00:00").unwrap(), expected);
            assert_eq!(parse_picker_date(" 2020-01-02 00:00:00 ").unwrap(), expected);
            assert!(parse_picker_date("02/01/2020x").is_err());
            assert!(parse_picker_date("").is_err());
        }

        #[test]
        fn test_parse_csv_date_formats() {
            let expected = NaiveDate::from_ymd_opt(2021, 3, 4).unwrap();
            assert_eq!(parse_csv_date("2021-03-04"), Some(expected));
            assert_eq!(parse_csv_date("03/04/2021"), Some(expected));
            assert_eq!(parse_csv_date("2021-03-04 16:00:00"), Some(expected));
            assert_eq!(parse_csv_date("2021-03-04T09:30:00"), Some(expected));
            assert_eq!(parse_csv_date("not a date"), None);
            assert_eq!(parse_csv_date("2021-02-30"), None);
        }
    }
}
