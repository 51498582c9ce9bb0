use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use super::error::DataError;
use super::model::{Column, Dataset, RentalRecord};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the rental dataset from a CSV file.
pub fn load_csv(path: &Path) -> Result<Dataset, DataError> {
    log::debug!("Reading rentals from {}", path.display());
    let file = File::open(path)?;
    let dataset = load_reader(file)?;
    log::info!(
        "Loaded {} rows from {} ({} .. {})",
        dataset.len(),
        path.display(),
        dataset.min_date(),
        dataset.max_date()
    );
    Ok(dataset)
}

/// CSV layout: header row, then one row per hour of rentals.
///
/// ```text
/// date,hour,season,weathersit,casual,registered,count
/// 2011-01-01,0,1,1,3,13,16
/// ```
pub fn load_reader<R: Read>(reader: R) -> Result<Dataset, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    // `date` plus every numeric column; any others are ignored
    let required = std::iter::once("date").chain(Column::ALL.map(Column::name));
    for required in required {
        if !headers.iter().any(|h| h == required) {
            return Err(DataError::MissingColumn(required));
        }
    }

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result?;
        let row = i + 1;
        let date = parse_date(&raw.date).ok_or_else(|| DataError::ParseDate {
            row,
            value: raw.date.clone(),
        })?;

        records.push(RentalRecord {
            index: i,
            date,
            hour: raw.hour,
            season: raw.season,
            weathersit: raw.weathersit,
            casual: raw.casual,
            registered: raw.registered,
            count: raw.count,
        });
    }

    let mismatched = records
        .iter()
        .filter(|r| !r.satisfies_count_invariant())
        .count();
    if mismatched > 0 {
        log::warn!("{mismatched} rows have count != casual + registered");
    }

    Dataset::new(records)
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRecord {
    date: String,
    hour: u8,
    season: u8,
    weathersit: u8,
    casual: u32,
    registered: u32,
    count: u32,
}

/// Parse a calendar date, dropping any time-of-day component.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local().date());
    }
    NaiveDate::parse_from_str(s, "%m/%d/%Y").ok()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::data::model::tests::date;

    const HEADER: &str = "date,hour,season,weathersit,casual,registered,count\n";

    fn load_str(body: &str) -> Result<Dataset, DataError> {
        load_reader(format!("{HEADER}{body}").as_bytes())
    }

    #[test]
    fn loads_and_sorts_by_date() {
        let ds = load_str(
            "2011-01-02,0,1,1,1,2,3\n\
             2011-01-01,1,1,2,4,5,9\n\
             2011-01-01,0,1,1,3,13,16\n",
        )
        .unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.min_date(), date(2011, 1, 1));
        assert_eq!(ds.max_date(), date(2011, 1, 2));
        // ties keep file order
        let hours: Vec<u8> = ds.records().iter().map(|r| r.hour).collect();
        assert_eq!(hours, vec![1, 0, 0]);
        assert_eq!(ds.records()[2].index, 2);
        assert_eq!(ds.records()[1].count, 16);
    }

    #[test]
    fn ignores_extra_columns_in_any_order() {
        let csv = "instant,count,date,temp,registered,casual,weathersit,season,hour\n\
                   1,16,2011-01-01,0.24,13,3,1,1,0\n";
        let ds = load_reader(csv.as_bytes()).unwrap();
        let r = &ds.records()[0];
        assert_eq!((r.casual, r.registered, r.count), (3, 13, 16));
        assert_eq!((r.hour, r.season, r.weathersit), (0, 1, 1));
    }

    #[test]
    fn accepts_timestamps_and_drops_time() {
        let ds = load_str(
            "2011-01-01 23:00:00,23,1,1,1,1,2\n\
             2011-01-02T05:00:00,5,1,1,1,1,2\n\
             2011-01-03T05:00:00+02:00,5,1,1,1,1,2\n\
             01/04/2011,5,1,1,1,1,2\n",
        )
        .unwrap();
        let dates: Vec<NaiveDate> = ds.records().iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![
                date(2011, 1, 1),
                date(2011, 1, 2),
                date(2011, 1, 3),
                date(2011, 1, 4)
            ]
        );
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "date,hour,season,casual,registered,count\n2011-01-01,0,1,3,13,16\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn("weathersit")));
    }

    #[test]
    fn bad_date_names_the_row() {
        let err = load_str("2011-01-01,0,1,1,3,13,16\nyesterday,1,1,1,3,13,16\n").unwrap_err();
        match err {
            DataError::ParseDate { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_number_is_a_csv_error() {
        let err = load_str("2011-01-01,zero,1,1,3,13,16\n").unwrap_err();
        assert!(matches!(err, DataError::Csv(_)));
    }

    #[test]
    fn header_only_file_is_empty() {
        assert!(matches!(load_str(""), Err(DataError::EmptyDataset)));
    }

    #[test]
    fn count_mismatch_is_kept() {
        let ds = load_str("2011-01-01,0,1,1,3,13,99\n").unwrap();
        assert_eq!(ds.records()[0].count, 99);
    }

    #[test]
    fn loads_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}2011-01-01,0,1,1,3,13,16").unwrap();

        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_csv(&dir.path().join("data.csv")).unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
    }
}
