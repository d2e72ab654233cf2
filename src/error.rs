use crate::ride_data::error::RideDataError;
use chrono::NaiveDate;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    RideData(#[from] RideDataError),

    #[error("Invalid date interval: start {start} is after end {end}")]
    InvalidInterval { start: NaiveDate, end: NaiveDate },

    #[error("Could not resolve '{0}' to a date interval")]
    DateParsingError(String),

    #[error("Failed building chart table")]
    ChartFrame(#[source] PolarsError),
}
