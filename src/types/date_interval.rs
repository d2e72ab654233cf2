//! The inclusive date range used to filter ride records.

use crate::error::DashboardError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// An inclusive `[start, end]` range of calendar dates.
///
/// The invariant `start <= end` is checked on construction, so every
/// `DateInterval` in circulation is valid. A reversed pair is rejected with
/// [`DashboardError::InvalidInterval`] rather than swapped or clamped.
///
/// # Examples
///
/// ```rust
/// use bikeshare_dashboard::DateInterval;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2011, 1, 31).unwrap();
///
/// let january = DateInterval::new(start, end).unwrap();
/// assert!(january.contains(NaiveDate::from_ymd_opt(2011, 1, 15).unwrap()));
/// assert!(DateInterval::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval {
    /// Creates an interval, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DashboardError> {
        if start > end {
            return Err(DashboardError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// An interval covering exactly one day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// The smallest interval containing every date yielded by `dates`, or `None` if empty.
    pub fn spanning(dates: impl IntoIterator<Item = NaiveDate>) -> Option<Self> {
        dates.into_iter().fold(None, |acc: Option<Self>, date| {
            Some(match acc {
                None => Self::single_day(date),
                Some(interval) => Self {
                    start: interval.start.min(date),
                    end: interval.end.max(date),
                },
            })
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `start <= date <= end`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Narrows this interval to `bounds`, the way a date picker limits the
    /// selectable range to the data span.
    ///
    /// Returns `None` when the two intervals do not overlap.
    pub fn clamp_to(&self, bounds: &DateInterval) -> Option<DateInterval> {
        let start = self.start.max(bounds.start);
        let end = self.end.min(bounds.end);
        (start <= end).then_some(DateInterval { start, end })
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
