pub mod cleaned;
pub mod enriched;
pub mod monthly;
pub mod record;

pub use cleaned::CleanedRecord;
pub use enriched::EnrichedRecord;
pub use monthly::MonthlyAggregate;
pub use record::StationRecord;
