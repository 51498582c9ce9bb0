use std::fmt;

use chrono::NaiveDate;

use super::model::{Dataset, RentalRecord};

// ---------------------------------------------------------------------------
// DateRange – the user's date selection
// ---------------------------------------------------------------------------

/// Inclusive calendar-date range. `start > end` is allowed and selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The range spanning the whole dataset.
    pub fn full(dataset: &Dataset) -> Self {
        let (start, end) = dataset.bounds();
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Clamp both ends into `[min, max]`.
    pub fn clamp_to(self, (min, max): (NaiveDate, NaiveDate)) -> Self {
        Self {
            start: self.start.clamp(min, max),
            end: self.end.clamp(min, max),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} – {}", self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Rows of `records` whose date lies in `range`.
///
/// `records` must be sorted by date, which holds for [`Dataset::records`] and
/// for any slice returned from here, so the match is a contiguous sub-slice
/// located by binary search.
pub fn filter_by_date<'a>(records: &'a [RentalRecord], range: &DateRange) -> &'a [RentalRecord] {
    if range.is_empty() {
        return &[];
    }
    let lo = records.partition_point(|r| r.date < range.start);
    let hi = records.partition_point(|r| r.date <= range.end);
    &records[lo..hi.max(lo)]
}

/// Convenience wrapper over [`filter_by_date`] for a whole dataset.
pub fn filter_dataset<'a>(dataset: &'a Dataset, range: &DateRange) -> &'a [RentalRecord] {
    filter_by_date(dataset.records(), range)
}
