use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RideDataError {
    #[error("Failed to read data file '{0}'")]
    DataFileRead(PathBuf, #[source] std::io::Error),

    #[error("Data path '{0}' is not a file")]
    NotAFile(PathBuf),

    #[error("Parsing error reading CSV data from '{path}'")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Required column '{0}' not found in data")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Column '{column}' could not be read as {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
        #[source]
        source: PolarsError,
    },

    #[error("Column '{column}' holds {dtype} values, expected whole numbers")]
    NonIntegerColumn { column: String, dtype: String },

    #[error("Missing value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },

    #[error("Could not parse date '{value}' in column '{column}' at row {row}")]
    DateParse {
        column: String,
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Negative ride count {value} in column '{column}' at row {row}")]
    NegativeCount {
        column: String,
        row: usize,
        value: i64,
    },

    #[error("Dataset '{0}' contains no rows")]
    EmptyDataset(String),
}
