use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};
use crate::models::CleanedRecord;
use crate::utils::constants::DATE_FORMATS;

/// A cleaned row with the derived fields the aggregator and histograms need:
/// the parsed calendar date, its month (1-12) and year, and the daily mean
/// temperature (TMAX + TMIN) / 2 in °F, unrounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub station: String,
    pub date: NaiveDate,
    pub month: u32,
    pub year: i32,
    pub tmax: f64,
    pub tmin: f64,
    pub mean_temp: f64,
    pub prcp: f64,
    pub snow: Option<f64>,
}

impl EnrichedRecord {
    pub fn from_cleaned(record: &CleanedRecord) -> Result<Self> {
        let date = parse_observation_date(&record.date)?;

        Ok(Self {
            station: record.station.clone(),
            date,
            month: date.month(),
            year: date.year(),
            tmax: record.tmax,
            tmin: record.tmin,
            mean_temp: (record.tmax + record.tmin) / 2.0,
            prcp: record.prcp,
            snow: record.snow,
        })
    }
}

/// Parse a DATE cell. ISO-8601 `2023-01-10` is the primary format, with the
/// `01/10/2023` variant seen in some NOAA Climate Data Online exports as a
/// fallback. Anything else is rejected, naming the offending value.
pub fn parse_observation_date(raw: &str) -> Result<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Ok(date);
        }
    }

    Err(PipelineError::DateParse {
        value: raw.to_string(),
    })
}
