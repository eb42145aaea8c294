use tracing::debug;

use crate::models::{CleanedRecord, StationRecord};

/// Drops rows missing any of TMAX, TMIN or PRCP, and with them the DAPR/MDPR
/// columns. This is the pipeline's only silent filter and it is part of the
/// contract: rows missing only SNOW survive.
pub struct Cleaner;

impl Cleaner {
    pub fn new() -> Self {
        Self
    }

    /// Produces a new collection; the input is left untouched. Output order
    /// preserves input order. An empty result is valid.
    pub fn clean(&self, records: &[StationRecord]) -> Vec<CleanedRecord> {
        let cleaned: Vec<CleanedRecord> = records
            .iter()
            .filter_map(CleanedRecord::from_station)
            .collect();

        debug!(
            kept = cleaned.len(),
            dropped = records.len() - cleaned.len(),
            "cleaned station records"
        );
        cleaned
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        date: &str,
        tmax: Option<f64>,
        tmin: Option<f64>,
        prcp: Option<f64>,
        snow: Option<f64>,
    ) -> StationRecord {
        StationRecord {
            station: "USC00489025".to_string(),
            date: date.to_string(),
            tmax,
            tmin,
            prcp,
            snow,
            dapr: None,
            mdpr: None,
        }
    }

    #[test]
    fn test_membership_for_every_missing_combination() {
        // A row survives iff all three of TMAX, TMIN, PRCP are present
        for mask in 0u8..8 {
            let tmax = (mask & 1 != 0).then_some(40.0);
            let tmin = (mask & 2 != 0).then_some(10.0);
            let prcp = (mask & 4 != 0).then_some(0.1);
            let input = vec![record("2023-01-10", tmax, tmin, prcp, None)];

            let cleaned = Cleaner::new().clean(&input);
            let expected = tmax.is_some() && tmin.is_some() && prcp.is_some();
            assert_eq!(cleaned.len() == 1, expected, "mask {mask:#05b}");
        }
    }

    #[test]
    fn test_missing_snow_survives() {
        let input = vec![record("2023-01-10", Some(40.0), Some(10.0), Some(0.1), None)];
        let cleaned = Cleaner::new().clean(&input);

        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].snow, None);
    }

    #[test]
    fn test_order_preserved() {
        let input = vec![
            record("2023-01-10", Some(40.0), Some(10.0), Some(0.1), None),
            record("2023-01-15", None, Some(12.0), Some(0.2), None),
            record("2023-01-20", Some(50.0), Some(20.0), Some(0.0), None),
        ];

        let cleaned = Cleaner::new().clean(&input);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[0].date, "2023-01-10");
        assert_eq!(cleaned[1].date, "2023-01-20");
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(Cleaner::new().clean(&[]).is_empty());
    }
}
