//! Simulation Log Analyzer
//!
//! Parses structured text logs produced by a network-simulation experiment,
//! extracts per-scenario time-series measurements (throughput, packet delay,
//! retransmission counts, serial communication errors), computes empirical
//! coverage intervals, and renders one comparative chart per scenario block.

pub mod analyzer;
pub mod app;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod parser;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use analyzer::{analyze_block, analyze_record, BlockAnalysis, RecordAnalysis};
pub use chart::ScenarioChart;
pub use error::{AppError, Result};
pub use models::{Config, ConfidenceInterval, MetricRow, SummaryStats, TestRecord, ThroughputCurve};
pub use output::{ColoredFormatter, OutputFormatter, OutputFormatterFactory, PlainFormatter};
pub use stats::confidence_interval;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Default configuration values
pub mod defaults {
    /// Coverage mass reported per metric row
    pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;
    /// Directory charts render into
    pub const DEFAULT_CHART_DIR: &str = "charts";
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
