use crate::types::date_interval::DateInterval;
use crate::types::ride_record::RideRecord;

pub trait RideRecordsFilterExt {
    /// Keeps the records whose date lies in `interval` (both ends inclusive).
    ///
    /// Order is preserved and nothing is deduplicated, so the result is exactly the
    /// sub-sequence of matching records.
    fn filter_interval(&self, interval: &DateInterval) -> Vec<RideRecord>;

    /// The smallest interval covering every record's date, or `None` when empty.
    fn date_bounds(&self) -> Option<DateInterval>;

    /// Sum of ride counts over all records.
    fn total_rides(&self) -> u64;
}

impl RideRecordsFilterExt for [RideRecord] {
    fn filter_interval(&self, interval: &DateInterval) -> Vec<RideRecord> {
        self.iter()
            .filter(|record| interval.contains(record.date))
            .copied()
            .collect()
    }

    fn date_bounds(&self) -> Option<DateInterval> {
        DateInterval::spanning(self.iter().map(|record| record.date))
    }

    fn total_rides(&self) -> u64 {
        self.iter().map(|record| record.count).sum()
    }
}
