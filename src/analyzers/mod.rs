pub mod dataset_analyzer;
pub mod histogram;
pub mod monthly_series;

pub use dataset_analyzer::{DatasetAnalyzer, DatasetSummary};
pub use histogram::{HistogramBin, TemperatureHistogram};
pub use monthly_series::MonthlySeries;
