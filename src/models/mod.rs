//! Data models and structures for the simulation log analyzer

pub mod config;
pub mod metrics;
pub mod record;

// Re-export main model types
pub use config::Config;
pub use metrics::{ConfidenceInterval, SummaryStats, ThroughputCurve};
pub use record::{MetricRow, TestRecord};
