//! Agregácia metrík nad jedným datasetom.

pub mod aggregator;
pub mod result;

pub use aggregator::{roi, Aggregator};
pub use result::{AnalysisResult, ChannelAnalysis};
