use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{EnrichedRecord, MonthlyAggregate};

/// Groups enriched rows by calendar month across all years: temperatures are
/// averaged, precipitation and snowfall totalled. Months with no rows produce
/// no output row; the table is never zero-filled out to twelve months.
pub struct Aggregator;

impl Aggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn aggregate_monthly(&self, records: &[EnrichedRecord]) -> Vec<MonthlyAggregate> {
        let mut partitions: BTreeMap<u32, Vec<&EnrichedRecord>> = BTreeMap::new();
        for record in records {
            partitions.entry(record.month).or_default().push(record);
        }

        // BTreeMap iteration gives ascending month order
        let aggregates: Vec<MonthlyAggregate> = partitions
            .into_iter()
            .map(|(month, rows)| Self::summarize_partition(month, &rows))
            .collect();

        debug!(months = aggregates.len(), "aggregated monthly records");
        aggregates
    }

    /// Select the daily rows of one calendar year. This is the second,
    /// independent consumer of enricher output (histogram input), not an
    /// alternative aggregation.
    pub fn filter_year(&self, records: &[EnrichedRecord], year: i32) -> Vec<EnrichedRecord> {
        records
            .iter()
            .filter(|record| record.year == year)
            .cloned()
            .collect()
    }

    fn summarize_partition(month: u32, rows: &[&EnrichedRecord]) -> MonthlyAggregate {
        // The cleaner guarantees TMAX/TMIN/PRCP on every surviving row, so
        // the mean denominators equal the partition size.
        let count = rows.len() as f64;

        MonthlyAggregate {
            month,
            mean_temp_avg: rows.iter().map(|r| r.mean_temp).sum::<f64>() / count,
            tmax_avg: rows.iter().map(|r| r.tmax).sum::<f64>() / count,
            tmin_avg: rows.iter().map(|r| r.tmin).sum::<f64>() / count,
            prcp_total: rows.iter().map(|r| r.prcp).sum(),
            // SNOW is never cleaned for, so residual gaps count as zero
            snow_total: rows.iter().map(|r| r.snow.unwrap_or(0.0)).sum(),
        }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}
