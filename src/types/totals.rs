//! Output rows of the two aggregations, in the shape the charts consume.

use crate::types::date_interval::DateInterval;
use crate::types::weather_condition::{label_for_code, WeatherCondition};
use chrono::NaiveDate;
use serde::Serialize;

/// Sum of ride counts for one calendar day.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total_rides: u64,
}

/// Sum of ride counts for one weather code.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct WeatherTotal {
    /// Raw `weathersit` code the rows were grouped by.
    #[serde(skip)]
    pub code: i64,
    /// Chart label; `"Unknown"` for codes outside `1..=4`.
    #[serde(rename = "weather_condition")]
    pub label: &'static str,
    pub total_rides: u64,
}

impl WeatherTotal {
    pub fn new(code: i64, total_rides: u64) -> Self {
        Self {
            code,
            label: label_for_code(code),
            total_rides,
        }
    }

    pub fn condition(&self) -> Option<WeatherCondition> {
        WeatherCondition::from_i64(self.code)
    }
}

/// Both summary tables computed for one [`DateInterval`].
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Aggregates {
    pub interval: DateInterval,
    pub daily: Vec<DailyTotal>,
    pub weather: Vec<WeatherTotal>,
}

impl Aggregates {
    /// Total rides in the interval.
    pub fn total_rides(&self) -> u64 {
        self.daily.iter().map(|d| d.total_rides).sum()
    }

    /// True when the interval matched no records.
    pub fn is_empty(&self) -> bool {
        self.daily.is_empty()
    }
}
