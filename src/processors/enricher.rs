use tracing::debug;

use crate::error::Result;
use crate::models::{CleanedRecord, EnrichedRecord};

/// Derives month, year and daily mean temperature for each cleaned row.
///
/// Date parsing happens here, not at load time, so the raw DATE text is still
/// available to name in the error. One unparseable date rejects the whole
/// batch rather than silently thinning the dataset.
pub struct Enricher;

impl Enricher {
    pub fn new() -> Self {
        Self
    }

    pub fn enrich(&self, records: &[CleanedRecord]) -> Result<Vec<EnrichedRecord>> {
        let enriched = records
            .iter()
            .map(EnrichedRecord::from_cleaned)
            .collect::<Result<Vec<_>>>()?;

        debug!(records = enriched.len(), "enriched station records");
        Ok(enriched)
    }
}

impl Default for Enricher {
    fn default() -> Self {
        Self::new()
    }
}
