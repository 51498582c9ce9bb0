use std::io;

use thiserror::Error;

/// Errors produced while loading or querying the rental dataset.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("reading data file: {0}")]
    Io(#[from] io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),

    /// `row` is the 1-based data row (the header is not counted).
    #[error("row {row}: '{value}' is not a date")]
    ParseDate { row: usize, value: String },

    #[error("dataset contains no rows")]
    EmptyDataset,
}
