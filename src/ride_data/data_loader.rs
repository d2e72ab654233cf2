use crate::ride_data::error::RideDataError;
use crate::ride_data::extractor::extract_records;
use crate::ride_data::schema::DatasetSchema;
use crate::types::ride_record::RideRecord;
use log::{debug, info, warn};
use polars::prelude::*;
use std::fs;
use std::path::Path;

pub struct RideDataLoader {
    schema: DatasetSchema,
}

impl RideDataLoader {
    pub fn new(schema: DatasetSchema) -> RideDataLoader {
        RideDataLoader { schema }
    }

    pub fn schema(&self) -> &DatasetSchema {
        &self.schema
    }

    /// Reads the CSV at `path` into ride records, in file order.
    ///
    /// Any problem with the file or a single row aborts the load.
    pub fn load(&self, path: &Path) -> Result<Vec<RideRecord>, RideDataError> {
        let metadata =
            fs::metadata(path).map_err(|e| RideDataError::DataFileRead(path.to_path_buf(), e))?;
        if !metadata.is_file() {
            return Err(RideDataError::NotAFile(path.to_path_buf()));
        }

        info!("Loading ride data from {:?}", path);
        let df = Self::read_csv(path)?;
        debug!(
            "Read {} rows x {} columns from {:?}",
            df.height(),
            df.width(),
            path
        );

        if df.height() == 0 {
            warn!("Data file {:?} has a header but no rows", path);
            return Err(RideDataError::EmptyDataset(path.display().to_string()));
        }

        let records = extract_records(&df, &self.schema)?;

        info!("Loaded {} ride records from {:?}", records.len(), path);
        Ok(records)
    }

    /// Parses the CSV (with header row) into a DataFrame, letting polars infer column types.
    fn read_csv(path: &Path) -> Result<DataFrame, RideDataError> {
        CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .map_err(|e| RideDataError::CsvRead {
                path: path.to_path_buf(),
                source: e,
            })?
            .finish()
            .map_err(|e| RideDataError::CsvRead {
                path: path.to_path_buf(),
                source: e,
            })
    }
}

impl Default for RideDataLoader {
    fn default() -> Self {
        Self::new(DatasetSchema::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt";

    fn write_csv(rows: &[&str]) -> Result<NamedTempFile, std::io::Error> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{}", HEADER)?;
        for row in rows {
            writeln!(file, "{}", row)?;
        }
        file.flush()?;
        Ok(file)
    }

    #[test]
    fn test_load_day_csv_layout() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[
            "1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,331,654,985",
            "2,2011-01-02,1,0,1,0,0,0,2,0.363478,0.353739,0.696087,0.248539,131,670,801",
            "3,2011-01-03,1,0,1,0,1,1,1,0.196364,0.189405,0.437273,0.248309,120,1229,1349",
        ])?;

        let records = RideDataLoader::default().load(file.path())?;

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(records[0].weather_code, 2);
        assert_eq!(records[0].count, 985);
        assert_eq!(records[2].weather_code, 1);
        assert_eq!(records[2].count, 1349);
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let err = RideDataLoader::default()
            .load(Path::new("./definitely/not/here.csv"))
            .unwrap_err();
        assert!(matches!(err, RideDataError::DataFileRead(_, _)));
    }

    #[test]
    fn test_load_directory_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let err = RideDataLoader::default().load(dir.path()).unwrap_err();
        assert!(matches!(err, RideDataError::NotAFile(_)));
        Ok(())
    }

    #[test]
    fn test_load_header_only_is_empty_dataset() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[])?;
        let err = RideDataLoader::default().load(file.path()).unwrap_err();
        assert!(matches!(err, RideDataError::EmptyDataset(_)));
        Ok(())
    }

    #[test]
    fn test_load_fractional_count_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[
            "1,2011-01-01,1,0,1,0,6,0,2,0.34,0.36,0.80,0.16,331,654,985",
            "2,2011-01-02,1,0,1,0,0,0,2,0.36,0.35,0.69,0.24,131,670,10.9",
        ])?;
        let err = RideDataLoader::default().load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            RideDataError::NonIntegerColumn { ref column, .. } if column == "cnt"
        ));
        Ok(())
    }

    #[test]
    fn test_load_unparsable_date_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[
            "1,2011-01-01,1,0,1,0,6,0,2,0.34,0.36,0.80,0.16,331,654,985",
            "2,01/02/2011,1,0,1,0,0,0,2,0.36,0.35,0.69,0.24,131,670,801",
        ])?;
        let err = RideDataLoader::default().load(file.path()).unwrap_err();
        assert!(matches!(err, RideDataError::DateParse { row: 1, .. }));
        Ok(())
    }

    #[test]
    fn test_load_with_custom_schema() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "day,weather,rides")?;
        writeln!(file, "05.03.2012,3,42")?;
        file.flush()?;

        let loader = RideDataLoader::new(DatasetSchema {
            date_column: "day".to_string(),
            weather_column: "weather".to_string(),
            count_column: "rides".to_string(),
            date_format: "%d.%m.%Y".to_string(),
        });
        let records = loader.load(file.path())?;

        assert_eq!(
            records,
            vec![RideRecord::new(
                NaiveDate::from_ymd_opt(2012, 3, 5).unwrap(),
                3,
                42
            )]
        );
        Ok(())
    }
}
