use crate::ride_data::error::RideDataError;
use crate::ride_data::schema::DatasetSchema;
use crate::types::ride_record::RideRecord;
use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;

// Timestamped exports (e.g. hourly data) are truncated to the day.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Retrieves a column by name from a DataFrame.
fn get_column<'a>(df: &'a DataFrame, col: &str) -> Result<&'a Column, RideDataError> {
    df.column(col)
        .map_err(|e| RideDataError::ColumnNotFound(col.to_string(), e))
}

/// Widens an integer column to `Int64`.
///
/// Float or text columns are rejected instead of cast, so `10.9` never becomes `10`.
fn integer_column(df: &DataFrame, col: &str) -> Result<Column, RideDataError> {
    let column = get_column(df, col)?;
    let dtype = column.dtype();
    if !(dtype.is_integer() || matches!(dtype, DataType::Null)) {
        return Err(RideDataError::NonIntegerColumn {
            column: col.to_string(),
            dtype: dtype.to_string(),
        });
    }
    column
        .cast(&DataType::Int64)
        .map_err(|source| RideDataError::ColumnType {
            column: col.to_string(),
            expected: "integer",
            source,
        })
}

fn missing(column: &str, row: usize) -> RideDataError {
    RideDataError::MissingValue {
        column: column.to_string(),
        row,
    }
}

fn parse_date(
    value: &str,
    row: usize,
    schema: &DatasetSchema,
) -> Result<NaiveDate, RideDataError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, &schema.date_format).or_else(|source| {
        NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
            .map(|datetime| datetime.date())
            .map_err(|_| RideDataError::DateParse {
                column: schema.date_column.clone(),
                row,
                value: value.to_string(),
                source,
            })
    })
}

/// Converts the loaded CSV frame into ride records, preserving row order.
///
/// Fails on the first row with a missing value, an unparsable date or a
/// negative count; there is no partial result.
pub(crate) fn extract_records(
    df: &DataFrame,
    schema: &DatasetSchema,
) -> Result<Vec<RideRecord>, RideDataError> {
    let date_column = get_column(df, &schema.date_column)?
        .cast(&DataType::String)
        .map_err(|source| RideDataError::ColumnType {
            column: schema.date_column.clone(),
            expected: "text",
            source,
        })?;
    let weather_column = integer_column(df, &schema.weather_column)?;
    let count_column = integer_column(df, &schema.count_column)?;

    let dates = date_column
        .str()
        .map_err(|source| RideDataError::ColumnType {
            column: schema.date_column.clone(),
            expected: "text",
            source,
        })?;
    let weather_codes = weather_column
        .i64()
        .map_err(|source| RideDataError::ColumnType {
            column: schema.weather_column.clone(),
            expected: "integer",
            source,
        })?;
    let counts = count_column
        .i64()
        .map_err(|source| RideDataError::ColumnType {
            column: schema.count_column.clone(),
            expected: "integer",
            source,
        })?;

    let mut records = Vec::with_capacity(df.height());
    for (row, ((date, weather_code), count)) in dates
        .into_iter()
        .zip(weather_codes.into_iter())
        .zip(counts.into_iter())
        .enumerate()
    {
        let date = date.ok_or_else(|| missing(&schema.date_column, row))?;
        let date = parse_date(date, row, schema)?;
        let weather_code = weather_code.ok_or_else(|| missing(&schema.weather_column, row))?;
        let count = count.ok_or_else(|| missing(&schema.count_column, row))?;
        let count = u64::try_from(count).map_err(|_| RideDataError::NegativeCount {
            column: schema.count_column.clone(),
            row,
            value: count,
        })?;

        records.push(RideRecord::new(date, weather_code, count));
    }

    Ok(records)
}
