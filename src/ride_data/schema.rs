//! Column layout of the rental CSV.

/// Names the columns the loader reads and how the date column is formatted.
///
/// The defaults match the public bike-sharing dataset (`day.csv` / `hour.csv`):
/// `dteday`, `weathersit` and `cnt`, with ISO `YYYY-MM-DD` dates. All other
/// columns in the file are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSchema {
    pub date_column: String,
    pub weather_column: String,
    pub count_column: String,
    /// `chrono` format string for the date column.
    pub date_format: String,
}

impl Default for DatasetSchema {
    fn default() -> Self {
        Self {
            date_column: "dteday".to_string(),
            weather_column: "weathersit".to_string(),
            count_column: "cnt".to_string(),
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}
