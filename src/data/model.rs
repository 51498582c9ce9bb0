use chrono::NaiveDate;

use super::error::DataError;

// ---------------------------------------------------------------------------
// RentalRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// Rentals recorded for one hour of one day.
///
/// `count` is expected to equal `casual + registered`. The loader reports
/// rows where it does not but keeps them as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalRecord {
    /// Position in the date-sorted dataset.
    pub index: usize,
    pub date: NaiveDate,
    /// Hour of day, 0–23.
    pub hour: u8,
    /// Season code, 1–4 (see [`Category::Season`]).
    pub season: u8,
    /// Weather situation code, 1–4 (see [`Category::Weather`]).
    pub weathersit: u8,
    pub casual: u32,
    pub registered: u32,
    pub count: u32,
}

impl RentalRecord {
    pub fn satisfies_count_invariant(&self) -> bool {
        u64::from(self.casual) + u64::from(self.registered) == u64::from(self.count)
    }
}

// ---------------------------------------------------------------------------
// Column – typed names of the numeric CSV columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Hour,
    Season,
    Weathersit,
    Casual,
    Registered,
    Count,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Hour,
        Column::Season,
        Column::Weathersit,
        Column::Casual,
        Column::Registered,
        Column::Count,
    ];

    /// Header name in the CSV file.
    pub const fn name(self) -> &'static str {
        match self {
            Column::Hour => "hour",
            Column::Season => "season",
            Column::Weathersit => "weathersit",
            Column::Casual => "casual",
            Column::Registered => "registered",
            Column::Count => "count",
        }
    }

    /// Read this column's value from a record.
    pub fn value(self, record: &RentalRecord) -> u32 {
        match self {
            Column::Hour => u32::from(record.hour),
            Column::Season => u32::from(record.season),
            Column::Weathersit => u32::from(record.weathersit),
            Column::Casual => record.casual,
            Column::Registered => record.registered,
            Column::Count => record.count,
        }
    }
}

// ---------------------------------------------------------------------------
// Category – code → label mappings for season and weather
// ---------------------------------------------------------------------------

/// A categorical column together with its display labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Season,
    Weather,
}

const SEASON_LABELS: [&str; 4] = ["Summer", "Fall", "Winter", "Spring"];
const WEATHER_LABELS: [&str; 4] = ["Clear", "Mist", "Light Snow", "Heavy Rain"];

impl Category {
    /// Every code the mapping knows, in ascending order.
    pub const fn codes() -> [u8; 4] {
        [1, 2, 3, 4]
    }

    /// Column holding this category's code.
    pub const fn column(self) -> Column {
        match self {
            Category::Season => Column::Season,
            Category::Weather => Column::Weathersit,
        }
    }

    /// Section name used in headings.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Season => "Season",
            Category::Weather => "Weather",
        }
    }

    /// Display label for `code`, or `None` for codes outside 1–4.
    pub fn label(self, code: u8) -> Option<&'static str> {
        let labels = match self {
            Category::Season => &SEASON_LABELS,
            Category::Weather => &WEATHER_LABELS,
        };
        let slot = usize::from(code).checked_sub(1)?;
        labels.get(slot).copied()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the loaded, date-sorted table
// ---------------------------------------------------------------------------

/// The full rental table, sorted ascending by date. Immutable once built.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<RentalRecord>,
    min_date: NaiveDate,
    max_date: NaiveDate,
}

impl Dataset {
    /// Sort `records` by date (stable), renumber them and compute the bounds.
    pub fn new(mut records: Vec<RentalRecord>) -> Result<Self, DataError> {
        records.sort_by_key(|r| r.date);
        for (i, r) in records.iter_mut().enumerate() {
            r.index = i;
        }

        let (Some(first), Some(last)) = (records.first(), records.last()) else {
            return Err(DataError::EmptyDataset);
        };
        let (min_date, max_date) = (first.date, last.date);

        Ok(Dataset {
            records,
            min_date,
            max_date,
        })
    }

    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    pub fn max_date(&self) -> NaiveDate {
        self.max_date
    }

    /// `(min_date, max_date)`.
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        (self.min_date, self.max_date)
    }
}
