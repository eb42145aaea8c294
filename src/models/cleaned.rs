use serde::{Deserialize, Serialize};

use crate::models::StationRecord;

/// A station row that survived cleaning: TMAX, TMIN and PRCP are guaranteed
/// present. DAPR/MDPR do not exist on this type at all, so nothing downstream
/// can reach for them. SNOW stays optional — the cleaner never filters on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanedRecord {
    pub station: String,
    pub date: String,
    pub tmax: f64,
    pub tmin: f64,
    pub prcp: f64,
    pub snow: Option<f64>,
}

impl CleanedRecord {
    /// Returns `None` when any of the three required measurements is missing.
    pub fn from_station(record: &StationRecord) -> Option<Self> {
        match (record.tmax, record.tmin, record.prcp) {
            (Some(tmax), Some(tmin), Some(prcp)) => Some(Self {
                station: record.station.clone(),
                date: record.date.clone(),
                tmax,
                tmin,
                prcp,
                snow: record.snow,
            }),
            _ => None,
        }
    }
}
