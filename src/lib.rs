mod aggregates;
mod chart;
mod dashboard;
mod error;
mod filtering;
mod report;
mod ride_data;
mod types;

pub use dashboard::*;
pub use error::DashboardError;

pub use aggregates::{daily_totals, weather_totals};
pub use filtering::RideRecordsFilterExt;
pub use report::render_text;

pub use ride_data::data_loader::RideDataLoader;
pub use ride_data::error::RideDataError;
pub use ride_data::schema::DatasetSchema;

pub use types::date_interval::DateInterval;
pub use types::ride_record::RideRecord;
pub use types::totals::{Aggregates, DailyTotal, WeatherTotal};
pub use types::weather_condition::{label_for_code, WeatherCondition, UNKNOWN_WEATHER_LABEL};

pub use types::traits::into_date_interval::IntoDateInterval;
pub use types::traits::types::Month;
pub use types::traits::types::Year;

pub use chart::frames::*;
pub use chart::layout::*;
#[cfg(feature = "plotting")]
pub use chart::render::*;
