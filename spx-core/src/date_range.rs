use chrono::NaiveDate;

/// Inclusive date bounds used to filter market rows.
///
/// A `None` bound leaves that side of the range open.
#[derive(Clone, Eq, PartialEq, Copy, Debug, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Closed range `[start, end]`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Range with either bound optional.
    pub fn bounded(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// True if `date` falls within the range, both ends inclusive.
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.start.map_or(true, |s| s <= *date) && self.end.map_or(true, |e| *date <= e)
    }

    /// True if no date can satisfy the range (start after end).
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(s), Some(e)) if s > e)
    }
}
