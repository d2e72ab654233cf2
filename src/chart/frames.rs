//! Converts the summary tables into polars `DataFrame`s for the chart renderer.

use crate::error::DashboardError;
use crate::types::totals::{DailyTotal, WeatherTotal};
use chrono::{Datelike, NaiveDate};
use polars::prelude::*;

pub const COL_DATE: &str = "date";
pub const COL_WEATHER_CONDITION: &str = "weather_condition";
pub const COL_TOTAL_RIDES: &str = "total_rides";

// Polars dates count days from 1970-01-01; chrono counts from 0001-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Days since 1970-01-01, the physical value of a polars `Date`.
pub(crate) fn days_since_epoch(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

/// `date` (Date) and `total_rides` (UInt64), one row per day.
pub fn daily_frame(totals: &[DailyTotal]) -> Result<DataFrame, DashboardError> {
    let days: Vec<i32> = totals
        .iter()
        .map(|t| days_since_epoch(t.date))
        .collect();
    let rides: Vec<u64> = totals.iter().map(|t| t.total_rides).collect();

    let dates = Column::new(COL_DATE.into(), days)
        .cast(&DataType::Date)
        .map_err(DashboardError::ChartFrame)?;

    DataFrame::new(vec![dates, Column::new(COL_TOTAL_RIDES.into(), rides)])
        .map_err(DashboardError::ChartFrame)
}

/// `weather_condition` (String label) and `total_rides` (UInt64), one row per code.
pub fn weather_frame(totals: &[WeatherTotal]) -> Result<DataFrame, DashboardError> {
    let labels: Vec<&str> = totals.iter().map(|t| t.label).collect();
    let rides: Vec<u64> = totals.iter().map(|t| t.total_rides).collect();

    DataFrame::new(vec![
        Column::new(COL_WEATHER_CONDITION.into(), labels),
        Column::new(COL_TOTAL_RIDES.into(), rides),
    ])
    .map_err(DashboardError::ChartFrame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_frame_schema_and_values() -> Result<(), Box<dyn std::error::Error>> {
        let totals = vec![
            DailyTotal {
                date: NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
                total_rides: 985,
            },
            DailyTotal {
                date: NaiveDate::from_ymd_opt(2011, 1, 2).unwrap(),
                total_rides: 801,
            },
        ];
        let df = daily_frame(&totals)?;

        assert_eq!(df.shape(), (2, 2));
        assert_eq!(df.column(COL_DATE)?.dtype(), &DataType::Date);

        // 2011-01-01 is day 14975 since the Unix epoch.
        let physical = df.column(COL_DATE)?.cast(&DataType::Int32)?;
        let days: Vec<Option<i32>> = physical.i32()?.into_iter().collect();
        assert_eq!(days, vec![Some(14_975), Some(14_976)]);

        let rides: Vec<Option<u64>> = df.column(COL_TOTAL_RIDES)?.u64()?.into_iter().collect();
        assert_eq!(rides, vec![Some(985), Some(801)]);
        Ok(())
    }

    #[test]
    fn test_weather_frame_labels() -> Result<(), Box<dyn std::error::Error>> {
        let totals = vec![WeatherTotal::new(1, 25), WeatherTotal::new(7, 3)];
        let df = weather_frame(&totals)?;

        let labels: Vec<Option<&str>> = df
            .column(COL_WEATHER_CONDITION)?
            .str()?
            .into_iter()
            .collect();
        assert_eq!(labels, vec![Some("Clear"), Some("Unknown")]);
        Ok(())
    }

    #[test]
    fn test_empty_frames() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(daily_frame(&[])?.height(), 0);
        assert_eq!(weather_frame(&[])?.height(), 0);
        Ok(())
    }
}
