//! The session context of the dashboard: one loaded table and the operations
//! the UI drives against it.

use crate::aggregates::{daily_totals, weather_totals};
use crate::error::DashboardError;
use crate::filtering::RideRecordsFilterExt;
use crate::ride_data::data_loader::RideDataLoader;
use crate::ride_data::error::RideDataError;
use crate::ride_data::schema::DatasetSchema;
use crate::types::date_interval::DateInterval;
use crate::types::ride_record::RideRecord;
use crate::types::totals::Aggregates;
use crate::types::traits::into_date_interval::IntoDateInterval;
use bon::bon;
use chrono::NaiveDate;
use log::{debug, info};
use std::path::PathBuf;

/// Where the dataset is read from when no path is configured.
pub const DEFAULT_DATA_PATH: &str = "./dashboard/data.csv";

/// Owns the ride records of one session and recomputes the chart summaries on demand.
///
/// The table is loaded once; every change of the selected [`DateInterval`] is a
/// fresh call to [`Dashboard::compute_aggregates`], which never mutates the
/// context. Independent sessions each hold their own `Dashboard`.
///
/// # Examples
///
/// ```no_run
/// use bikeshare_dashboard::{Dashboard, DashboardError};
///
/// # fn main() -> Result<(), DashboardError> {
/// let dashboard = Dashboard::open().data_path("./dashboard/data.csv").call()?;
///
/// let aggregates = dashboard.compute_aggregates(&dashboard.default_interval());
/// println!("{} days, {} rides", aggregates.daily.len(), aggregates.total_rides());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Dashboard {
    records: Vec<RideRecord>,
    bounds: DateInterval,
}

#[bon]
impl Dashboard {
    /// Loads the dataset and creates the session context.
    ///
    /// Both options are builder arguments:
    /// * `data_path` - CSV to read (default [`DEFAULT_DATA_PATH`]).
    /// * `schema` - column layout (default [`DatasetSchema::default`]).
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::RideData`] when the file is missing, cannot be parsed,
    /// has an unparsable date or contains no rows.
    #[builder]
    pub fn open(
        #[builder(into)] data_path: Option<PathBuf>,
        schema: Option<DatasetSchema>,
    ) -> Result<Self, DashboardError> {
        let data_path = data_path.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        let loader = RideDataLoader::new(schema.unwrap_or_default());
        let records = loader.load(&data_path)?;
        let dashboard = Self::from_records(records)?;
        info!(
            "Dashboard ready: {} records spanning {}",
            dashboard.records.len(),
            dashboard.bounds
        );
        Ok(dashboard)
    }

    /// Creates a session context over records that are already in memory.
    ///
    /// # Errors
    ///
    /// Returns [`RideDataError::EmptyDataset`] (wrapped) when `records` is empty,
    /// since there is no date range to offer.
    pub fn from_records(records: Vec<RideRecord>) -> Result<Self, DashboardError> {
        let bounds = records
            .date_bounds()
            .ok_or_else(|| RideDataError::EmptyDataset("in-memory records".to_string()))?;
        Ok(Self { records, bounds })
    }

    /// All loaded records, in file order.
    pub fn records(&self) -> &[RideRecord] {
        &self.records
    }

    /// The earliest and latest date in the table.
    pub fn bounds(&self) -> DateInterval {
        self.bounds
    }

    /// The interval selected before the user touches the date picker: the full data span.
    pub fn default_interval(&self) -> DateInterval {
        self.bounds
    }

    /// Builds an interval from optional picker values.
    ///
    /// A missing end becomes the last data date, or `start` when that lies past the data.
    /// A missing start becomes the first data date, or `end` when that lies before the data.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidInterval`] if both ends are given and start is after end.
    pub fn select_interval(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<DateInterval, DashboardError> {
        match (start, end) {
            (Some(start), Some(end)) => DateInterval::new(start, end),
            (Some(start), None) => DateInterval::new(start, self.bounds.end().max(start)),
            (None, Some(end)) => DateInterval::new(self.bounds.start().min(end), end),
            (None, None) => Ok(self.bounds),
        }
    }

    /// The records whose date lies within `interval`, in file order.
    pub fn filter(&self, interval: &DateInterval) -> Vec<RideRecord> {
        self.records.filter_interval(interval)
    }

    /// Filters to `interval` and computes both chart summaries.
    ///
    /// An interval that matches nothing yields empty summaries rather than an error.
    pub fn compute_aggregates(&self, interval: &DateInterval) -> Aggregates {
        let filtered = self.filter(interval);
        debug!(
            "Recomputing aggregates for {}: {} of {} records selected",
            interval,
            filtered.len(),
            self.records.len()
        );
        Aggregates {
            interval: *interval,
            daily: daily_totals(&filtered),
            weather: weather_totals(&filtered),
        }
    }

    /// Resolves `period` (a [`crate::Year`], [`crate::Month`], date pair or string) and
    /// computes the summaries for it.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::DateParsingError`] or [`DashboardError::InvalidInterval`]
    /// if `period` cannot be turned into a valid interval.
    pub fn compute_for(&self, period: impl IntoDateInterval) -> Result<Aggregates, DashboardError> {
        let interval = period.into_date_interval()?;
        Ok(self.compute_aggregates(&interval))
    }
}
