pub mod date_interval;
pub mod ride_record;
pub mod totals;
pub mod traits;
pub mod weather_condition;
