use serde::{Deserialize, Serialize};
use validator::Validate;

/// One raw row of a GHCN-Daily CSV export.
///
/// Temperatures are whole degrees Fahrenheit, precipitation and snowfall are
/// inches. Empty cells deserialize to `None` rather than zero. DATE is kept as
/// the raw text it arrived as; calendar parsing happens during enrichment.
/// Columns beyond the required set are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StationRecord {
    #[serde(rename = "STATION")]
    pub station: String,

    #[serde(rename = "DATE")]
    pub date: String,

    #[serde(rename = "TMAX")]
    #[validate(range(min = -80.0, max = 135.0))]
    pub tmax: Option<f64>,

    #[serde(rename = "TMIN")]
    #[validate(range(min = -80.0, max = 135.0))]
    pub tmin: Option<f64>,

    #[serde(rename = "PRCP")]
    #[validate(range(min = 0.0))]
    pub prcp: Option<f64>,

    #[serde(rename = "SNOW")]
    #[validate(range(min = 0.0))]
    pub snow: Option<f64>,

    // Multi-day precipitation bookkeeping. Carried through loading so the
    // cleaner can drop it explicitly; never used downstream.
    #[serde(rename = "DAPR")]
    pub dapr: Option<f64>,

    #[serde(rename = "MDPR")]
    pub mdpr: Option<f64>,
}

impl StationRecord {
    /// The three measurements the cleaner filters on. SNOW is deliberately
    /// not part of this set.
    pub fn has_core_measurements(&self) -> bool {
        self.tmax.is_some() && self.tmin.is_some() && self.prcp.is_some()
    }
}
