//! Scenario analysis: turns parsed records into curves and summary lines
//!
//! Parsing produces tagged rows; this module replays them in input order,
//! reconstructs the throughput curve from packet-delay samples, computes
//! coverage intervals, and emits plot series plus console lines. It is
//! side-effect free: printing and chart rendering happen in the caller.

use crate::{
    models::{ConfidenceInterval, MetricRow, SummaryStats, TestRecord, ThroughputCurve},
    parser::ScenarioBlock,
};

/// A labeled plot series produced for one metric row
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSeries {
    /// Legend label, e.g. "Delay [s] load test: 10"
    pub label: String,
    /// (time, value) points
    pub points: Vec<(f64, f64)>,
}

/// One console line produced while analyzing a record
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleLine {
    /// Coverage interval summary for one metric row
    Interval {
        /// Row label including the record title
        label: String,
        /// The computed interval
        interval: ConfidenceInterval,
        /// Unit suffix, e.g. "b/s" for the throughput line
        unit: Option<String>,
        /// Summary statistics over the same samples, for verbose output
        stats: Option<SummaryStats>,
    },
    /// Serial communication error diagnostic
    SerialErrors {
        /// Record title
        title: String,
        /// Raw error counts
        values: Vec<i64>,
    },
}

/// Analysis result for one test record
#[derive(Debug, Clone)]
pub struct RecordAnalysis {
    /// Scenario label of the record
    pub scenario: String,
    /// Record title
    pub title: String,
    /// Plot series in row order
    pub curves: Vec<CurveSeries>,
    /// Console lines in row order
    pub console: Vec<ConsoleLine>,
}

/// Analysis result for one scenario block
#[derive(Debug, Clone)]
pub struct BlockAnalysis {
    /// Scenario label shared by the block
    pub scenario: String,
    /// Chart title for the block
    pub chart_title: String,
    /// Per-record analyses in file order
    pub records: Vec<RecordAnalysis>,
}

impl BlockAnalysis {
    /// Iterate over all plot series of the block, across records
    pub fn all_curves(&self) -> impl Iterator<Item = &CurveSeries> {
        self.records.iter().flat_map(|r| r.curves.iter())
    }
}

/// Analyze one scenario block
pub fn analyze_block(block: &ScenarioBlock, confidence: f64) -> BlockAnalysis {
    let scenario = block.scenario().to_string();
    BlockAnalysis {
        chart_title: format!("Network performance in Scenario: {}", scenario),
        scenario,
        records: block
            .records
            .iter()
            .map(|record| analyze_record(record, confidence))
            .collect(),
    }
}

/// Analyze one test record
///
/// Rows are replayed in input order. Packet-delay rows accumulate into the
/// record's throughput curve and apply the load scaling as encountered;
/// the throughput placeholder row is replaced by the accumulated curve
/// drawn against a synthetic 0-60 s axis, with its interval computed over
/// b/s-rescaled values.
pub fn analyze_record(record: &TestRecord, confidence: f64) -> RecordAnalysis {
    let mut curves = Vec::new();
    let mut console = Vec::new();
    let mut throughput = ThroughputCurve::new();

    for row in &record.rows {
        match row {
            MetricRow::Delay { values, .. } => {
                for (&start, &delay) in record.timescale.iter().zip(values.iter()) {
                    throughput.accumulate(start, delay);
                }
                throughput.scale(record.load as f64);

                let label = format!("Delay [s] {}", record.title);
                console.push(ConsoleLine::Interval {
                    label: label.clone(),
                    interval: ConfidenceInterval::compute(confidence, values),
                    unit: None,
                    stats: SummaryStats::from_values(values),
                });
                curves.push(CurveSeries {
                    label,
                    points: record
                        .timescale
                        .iter()
                        .zip(values.iter())
                        .map(|(&t, &v)| (t, v))
                        .collect(),
                });
            }
            MetricRow::Retransmissions { values, .. } => {
                let label = format!("# Retransm. {}", record.title);
                console.push(ConsoleLine::Interval {
                    label: label.clone(),
                    interval: ConfidenceInterval::compute(confidence, values),
                    unit: None,
                    stats: SummaryStats::from_values(values),
                });
                curves.push(CurveSeries {
                    label,
                    points: record
                        .timescale
                        .iter()
                        .zip(values.iter())
                        .map(|(&t, &v)| (t, v))
                        .collect(),
                });
            }
            MetricRow::ThroughputPlaceholder { label } => {
                let per_second = throughput.values_per_second();
                console.push(ConsoleLine::Interval {
                    label: format!("{} {}", label, record.title),
                    interval: ConfidenceInterval::compute(confidence, &per_second),
                    unit: Some("b/s".to_string()),
                    stats: SummaryStats::from_values(&per_second),
                });
                curves.push(CurveSeries {
                    label: format!(" Thrp [b/ms] {}", record.title),
                    points: throughput
                        .time_axis()
                        .into_iter()
                        .zip(throughput.values().iter().copied())
                        .collect(),
                });
            }
            MetricRow::SerialErrors { values, .. } => {
                console.push(ConsoleLine::SerialErrors {
                    title: record.title.clone(),
                    values: values.clone(),
                });
            }
        }
    }

    RecordAnalysis {
        scenario: record.scenario.clone(),
        title: record.title.clone(),
        curves,
        console,
    }
}
