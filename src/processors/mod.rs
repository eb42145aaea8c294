pub mod aggregator;
pub mod cleaner;
pub mod enricher;
pub mod pipeline;

pub use aggregator::Aggregator;
pub use cleaner::Cleaner;
pub use enricher::Enricher;
pub use pipeline::{Pipeline, PipelineOutput};
