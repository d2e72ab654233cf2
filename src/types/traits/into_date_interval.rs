use crate::error::DashboardError;
use crate::types::date_interval::DateInterval;
use crate::types::traits::types::{Month, Year};
use crate::types::traits::utils::days_in_month;
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Anything that can be resolved into an inclusive [`DateInterval`].
///
/// Implemented for single dates, date pairs, [`Year`], [`Month`] and strings
/// of the form `2011-01-05`, `2011-01-05..2011-02-01`, `2011-03` or `2011`.
pub trait IntoDateInterval {
    fn into_date_interval(self) -> Result<DateInterval, DashboardError>;
}

impl IntoDateInterval for DateInterval {
    fn into_date_interval(self) -> Result<DateInterval, DashboardError> {
        Ok(self)
    }
}

impl IntoDateInterval for NaiveDate {
    fn into_date_interval(self) -> Result<DateInterval, DashboardError> {
        Ok(DateInterval::single_day(self))
    }
}

impl IntoDateInterval for (NaiveDate, NaiveDate) {
    fn into_date_interval(self) -> Result<DateInterval, DashboardError> {
        DateInterval::new(self.0, self.1)
    }
}

impl IntoDateInterval for Year {
    fn into_date_interval(self) -> Result<DateInterval, DashboardError> {
        let start = NaiveDate::from_ymd_opt(self.0, 1, 1)
            .ok_or_else(|| DashboardError::DateParsingError(self.to_string()))?;
        let end = NaiveDate::from_ymd_opt(self.0, 12, 31)
            .ok_or_else(|| DashboardError::DateParsingError(self.to_string()))?;
        DateInterval::new(start, end)
    }
}

impl IntoDateInterval for Month {
    fn into_date_interval(self) -> Result<DateInterval, DashboardError> {
        let year = self.year();
        let month = self.month();
        let invalid = || DashboardError::DateParsingError(self.to_string());
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let last_day = days_in_month(year, month).ok_or_else(invalid)?;
        let end = NaiveDate::from_ymd_opt(year, month, last_day).ok_or_else(invalid)?;
        DateInterval::new(start, end)
    }
}

impl IntoDateInterval for &str {
    fn into_date_interval(self) -> Result<DateInterval, DashboardError> {
        let input = self.trim();
        let invalid = || DashboardError::DateParsingError(input.to_string());

        if let Some((start, end)) = input.split_once("..") {
            let start = NaiveDate::parse_from_str(start.trim(), DATE_FORMAT).map_err(|_| invalid())?;
            let end = NaiveDate::parse_from_str(end.trim(), DATE_FORMAT).map_err(|_| invalid())?;
            return DateInterval::new(start, end);
        }

        if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
            return date.into_date_interval();
        }

        // "YYYY-MM"
        if let Some((year, month)) = input.split_once('-') {
            let year = year.parse::<i32>().map_err(|_| invalid())?;
            let month = month.parse::<u32>().map_err(|_| invalid())?;
            return Month(year, month).into_date_interval();
        }

        if input.len() == 4 {
            if let Ok(year) = input.parse::<i32>() {
                return Year(year).into_date_interval();
            }
        }

        Err(invalid())
    }
}

impl IntoDateInterval for String {
    fn into_date_interval(self) -> Result<DateInterval, DashboardError> {
        self.as_str().into_date_interval()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_year_covers_whole_year() -> Result<(), DashboardError> {
        let interval = Year(2012).into_date_interval()?;
        assert_eq!(interval.start(), date(2012, 1, 1));
        assert_eq!(interval.end(), date(2012, 12, 31));
        assert_eq!(interval.num_days(), 366);
        Ok(())
    }

    #[test]
    fn test_month_ends_on_last_day() -> Result<(), DashboardError> {
        let interval = Month(2011, 2).into_date_interval()?;
        assert_eq!(interval.start(), date(2011, 2, 1));
        assert_eq!(interval.end(), date(2011, 2, 28));
        Ok(())
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        let err = Month(2011, 13).into_date_interval().unwrap_err();
        assert!(matches!(err, DashboardError::DateParsingError(_)));
    }

    #[test]
    fn test_date_pair_rejects_reversed_order() {
        let err = (date(2011, 5, 1), date(2011, 4, 1))
            .into_date_interval()
            .unwrap_err();
        assert!(matches!(err, DashboardError::InvalidInterval { .. }));
    }

    #[test]
    fn test_parse_strings() -> Result<(), DashboardError> {
        assert_eq!(
            "2011-01-05".into_date_interval()?,
            DateInterval::single_day(date(2011, 1, 5))
        );
        assert_eq!(
            "2011-01-05..2011-02-01".into_date_interval()?,
            DateInterval::new(date(2011, 1, 5), date(2011, 2, 1))?
        );
        assert_eq!(
            "2011-03".into_date_interval()?,
            DateInterval::new(date(2011, 3, 1), date(2011, 3, 31))?
        );
        assert_eq!(
            String::from("2011").into_date_interval()?,
            DateInterval::new(date(2011, 1, 1), date(2011, 12, 31))?
        );
        Ok(())
    }

    #[test]
    fn test_parse_garbage_fails() {
        for input in ["", "yesterday", "2011-01-05..", "01/05/2011", "20111"] {
            let err = input.into_date_interval().unwrap_err();
            assert!(
                matches!(err, DashboardError::DateParsingError(_)),
                "expected parse error for {input:?}"
            );
        }
    }
}
