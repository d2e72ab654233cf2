use chrono::NaiveDate;
use serde::Serialize;

/// One observation row of the rental dataset.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct RideRecord {
    pub date: NaiveDate,   // dteday
    pub weather_code: i64, // weathersit
    pub count: u64,        // cnt
}

impl RideRecord {
    pub fn new(date: NaiveDate, weather_code: i64, count: u64) -> Self {
        Self {
            date,
            weather_code,
            count,
        }
    }
}
