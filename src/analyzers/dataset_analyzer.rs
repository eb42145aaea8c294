use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{EnrichedRecord, StationRecord};

/// Descriptive statistics for one loaded export: station inventory, record
/// counts before and after cleaning, covered date range, and overall
/// temperature means.
#[derive(Debug, Serialize)]
pub struct DatasetSummary {
    pub stations: Vec<String>,
    pub raw_records: usize,
    pub cleaned_records: usize,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub tmax_mean: Option<f64>,
    pub tmin_mean: Option<f64>,
}

pub struct DatasetAnalyzer;

impl DatasetAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, raw: &[StationRecord], enriched: &[EnrichedRecord]) -> DatasetSummary {
        // Distinct station IDs in first-seen order. The dataset is expected
        // to hold exactly one; more is reported, not rejected.
        let mut stations: Vec<String> = Vec::new();
        for record in raw {
            if !stations.contains(&record.station) {
                stations.push(record.station.clone());
            }
        }

        let date_range = match (
            enriched.iter().map(|r| r.date).min(),
            enriched.iter().map(|r| r.date).max(),
        ) {
            (Some(first), Some(last)) => Some((first, last)),
            _ => None,
        };

        let count = enriched.len() as f64;
        let (tmax_mean, tmin_mean) = if enriched.is_empty() {
            (None, None)
        } else {
            (
                Some(enriched.iter().map(|r| r.tmax).sum::<f64>() / count),
                Some(enriched.iter().map(|r| r.tmin).sum::<f64>() / count),
            )
        };

        DatasetSummary {
            stations,
            raw_records: raw.len(),
            cleaned_records: enriched.len(),
            date_range,
            tmax_mean,
            tmin_mean,
        }
    }
}

impl Default for DatasetAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetSummary {
    pub fn summary(&self) -> String {
        let range = match self.date_range {
            Some((first, last)) => format!("{first} to {last}"),
            None => "no dated records".to_string(),
        };

        let temp = |value: Option<f64>| match value {
            Some(v) => format!("{v:.1}°F"),
            None => "n/a".to_string(),
        };

        format!(
            "Stations: {} ({})\n\
            Records: {} raw, {} after cleaning ({} dropped)\n\
            Date Range: {}\n\
            Mean TMAX: {}\n\
            Mean TMIN: {}",
            self.stations.len(),
            self.stations.join(", "),
            self.raw_records,
            self.cleaned_records,
            self.raw_records - self.cleaned_records,
            range,
            temp(self.tmax_mean),
            temp(self.tmin_mean),
        )
    }
}
