use serde::Serialize;

use crate::models::EnrichedRecord;
use crate::utils::constants::{
    TEMP_BIN_WIDTH, TMAX_BIN_END, TMAX_BIN_START, TMIN_BIN_END, TMIN_BIN_START,
};

#[derive(Debug, Clone, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Frequency distribution of a daily temperature series over fixed 5°F bins.
///
/// Bins are half-open [lower, upper) with the final bin closed, and values
/// outside [start, end] are not counted anywhere. A reading of exactly the
/// upper bound lands in the last bin.
#[derive(Debug, Serialize)]
pub struct TemperatureHistogram {
    pub bins: Vec<HistogramBin>,
}

impl TemperatureHistogram {
    pub fn with_bounds(start: f64, end: f64, width: f64) -> Self {
        let mut bins = Vec::new();
        let mut lower = start;
        while lower < end {
            bins.push(HistogramBin {
                lower,
                upper: lower + width,
                count: 0,
            });
            lower += width;
        }

        Self { bins }
    }

    /// Distribution of daily maximum temperatures, 10°F to 105°F.
    pub fn of_daily_max(records: &[EnrichedRecord]) -> Self {
        let mut histogram = Self::with_bounds(TMAX_BIN_START, TMAX_BIN_END, TEMP_BIN_WIDTH);
        for record in records {
            histogram.accumulate(record.tmax);
        }
        histogram
    }

    /// Distribution of daily minimum temperatures, -30°F to 65°F.
    pub fn of_daily_min(records: &[EnrichedRecord]) -> Self {
        let mut histogram = Self::with_bounds(TMIN_BIN_START, TMIN_BIN_END, TEMP_BIN_WIDTH);
        for record in records {
            histogram.accumulate(record.tmin);
        }
        histogram
    }

    pub fn accumulate(&mut self, value: f64) {
        let Some(first) = self.bins.first() else {
            return;
        };
        let start = first.lower;
        let width = first.upper - first.lower;
        let end = self.bins[self.bins.len() - 1].upper;

        if value < start || value > end {
            return;
        }

        let mut index = ((value - start) / width) as usize;
        if index == self.bins.len() {
            // Exactly the top edge belongs to the final bin
            index -= 1;
        }
        self.bins[index].count += 1;
    }

    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    fn enriched(date: &str, tmax: f64, tmin: f64) -> EnrichedRecord {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        EnrichedRecord {
            station: "USC00489025".to_string(),
            date,
            month: date.month(),
            year: date.year(),
            tmax,
            tmin,
            mean_temp: (tmax + tmin) / 2.0,
            prcp: 0.0,
            snow: None,
        }
    }

    #[test]
    fn test_bin_layout() {
        let histogram = TemperatureHistogram::with_bounds(10.0, 105.0, 5.0);
        assert_eq!(histogram.bins.len(), 19);
        assert_eq!(histogram.bins[0].lower, 10.0);
        assert_eq!(histogram.bins[0].upper, 15.0);
        assert_eq!(histogram.bins[18].upper, 105.0);
    }

    #[test]
    fn test_half_open_bins_with_closed_top() {
        let mut histogram = TemperatureHistogram::with_bounds(0.0, 10.0, 5.0);
        histogram.accumulate(0.0); // first bin
        histogram.accumulate(5.0); // second bin, not first
        histogram.accumulate(10.0); // top edge, second bin

        assert_eq!(histogram.bins[0].count, 1);
        assert_eq!(histogram.bins[1].count, 2);
    }

    #[test]
    fn test_out_of_range_values_dropped() {
        let records = vec![
            enriched("2023-01-10", 40.0, -40.0), // TMIN below the -30 floor
            enriched("2023-07-15", 107.0, 60.0), // TMAX above the 105 ceiling
        ];

        let max_histogram = TemperatureHistogram::of_daily_max(&records);
        let min_histogram = TemperatureHistogram::of_daily_min(&records);

        assert_eq!(max_histogram.total_count(), 1);
        assert_eq!(min_histogram.total_count(), 1);
    }

    #[test]
    fn test_daily_max_distribution() {
        let records = vec![
            enriched("2023-01-10", 40.0, 10.0),
            enriched("2023-01-11", 42.0, 12.0),
            enriched("2023-07-15", 90.0, 60.0),
        ];

        let histogram = TemperatureHistogram::of_daily_max(&records);
        assert_eq!(histogram.total_count(), 3);

        // 40 and 42 share the [40, 45) bin
        let bin = histogram
            .bins
            .iter()
            .find(|b| b.lower == 40.0)
            .unwrap();
        assert_eq!(bin.count, 2);
    }
}
