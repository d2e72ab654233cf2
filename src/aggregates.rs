//! The two summaries behind the dashboard charts.
//!
//! Both are folds over the (already filtered) records into an ordered map from
//! group key to running sum, read back out in key order. Groups only exist for
//! keys that occur in the input, so gaps are never zero-filled.

use crate::types::ride_record::RideRecord;
use crate::types::totals::{DailyTotal, WeatherTotal};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Sums ride counts per calendar day, ascending by date.
pub fn daily_totals(records: &[RideRecord]) -> Vec<DailyTotal> {
    let sums = records
        .iter()
        .fold(BTreeMap::<NaiveDate, u64>::new(), |mut sums, record| {
            *sums.entry(record.date).or_default() += record.count;
            sums
        });

    sums.into_iter()
        .map(|(date, total_rides)| DailyTotal { date, total_rides })
        .collect()
}

/// Sums ride counts per weather code, ascending by code, labelled for display.
pub fn weather_totals(records: &[RideRecord]) -> Vec<WeatherTotal> {
    let sums = records
        .iter()
        .fold(BTreeMap::<i64, u64>::new(), |mut sums, record| {
            *sums.entry(record.weather_code).or_default() += record.count;
            sums
        });

    sums.into_iter()
        .map(|(code, total_rides)| WeatherTotal::new(code, total_rides))
        .collect()
}
