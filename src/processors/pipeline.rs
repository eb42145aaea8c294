use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::{EnrichedRecord, MonthlyAggregate, StationRecord};
use crate::processors::{Aggregator, Cleaner, Enricher};
use crate::readers::StationReader;

/// The full load -> clean -> enrich -> aggregate pass over one station
/// export. Single-threaded and batch-oriented; the whole file is read once
/// and held in memory.
pub struct Pipeline {
    reader: StationReader,
    cleaner: Cleaner,
    enricher: Enricher,
    aggregator: Aggregator,
}

/// Everything downstream consumers need: the raw rows (for cleaning stats and
/// station inventory), the enriched daily rows, and the full-history monthly
/// table.
#[derive(Debug)]
pub struct PipelineOutput {
    pub raw: Vec<StationRecord>,
    pub enriched: Vec<EnrichedRecord>,
    pub monthly: Vec<MonthlyAggregate>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            reader: StationReader::new(),
            cleaner: Cleaner::new(),
            enricher: Enricher::new(),
            aggregator: Aggregator::new(),
        }
    }

    pub fn run(&self, path: &Path) -> Result<PipelineOutput> {
        let raw = self.reader.read_records(path)?;
        let cleaned = self.cleaner.clean(&raw);
        let enriched = self.enricher.enrich(&cleaned)?;
        let monthly = self.aggregator.aggregate_monthly(&enriched);

        info!(
            raw = raw.len(),
            cleaned = enriched.len(),
            months = monthly.len(),
            "pipeline complete"
        );

        Ok(PipelineOutput {
            raw,
            enriched,
            monthly,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
