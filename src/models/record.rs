//! Parsed test record data model
//!
//! The input format carries rows positionally (row 1 is timestamps, row 4
//! the throughput placeholder, row 5 the serial error counts). Parsing
//! converts that positional contract into explicitly tagged rows so the
//! rest of the pipeline never touches raw indices.

use crate::types::MetricKind;
use serde::{Deserialize, Serialize};

/// A single metric row of a test record, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetricRow {
    /// Packet delay samples in seconds; feeds the throughput reconstruction
    Delay {
        /// Raw label cell, e.g. "Packet delay [ns since send]"
        label: String,
        /// Delay per sample in seconds
        values: Vec<f64>,
    },
    /// Retransmission counts per sample
    Retransmissions {
        /// Raw label cell
        label: String,
        /// Count per sample, scaled like every float row
        values: Vec<f64>,
    },
    /// The throughput placeholder row: values are recomputed, never read
    ThroughputPlaceholder {
        /// Raw label cell, retained for the console summary line
        label: String,
    },
    /// Serial communication error counts, diagnostic only
    SerialErrors {
        /// Raw label cell
        label: String,
        /// Error count per sample
        values: Vec<i64>,
    },
}

impl MetricRow {
    /// Get the kind tag for this row
    pub fn kind(&self) -> MetricKind {
        match self {
            MetricRow::Delay { .. } => MetricKind::PacketDelay,
            MetricRow::Retransmissions { .. } => MetricKind::Retransmissions,
            MetricRow::ThroughputPlaceholder { .. } => MetricKind::Throughput,
            MetricRow::SerialErrors { .. } => MetricKind::SerialErrors,
        }
    }

    /// Get the raw label cell of this row
    pub fn label(&self) -> &str {
        match self {
            MetricRow::Delay { label, .. }
            | MetricRow::Retransmissions { label, .. }
            | MetricRow::ThroughputPlaceholder { label }
            | MetricRow::SerialErrors { label, .. } => label,
        }
    }
}

/// One six-line test record: title plus tagged metric rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    /// Scenario label from the title line (text before " ("), used in chart titles
    pub scenario: String,
    /// Parenthetical content of the title line, e.g. "load test: 10"
    pub title: String,
    /// Integer load factor parsed from the title, scales the throughput curve
    pub load: u64,
    /// Sample times in seconds, from the nanosecond timestamp row
    pub timescale: Vec<f64>,
    /// Metric rows in input order (timestamp row excluded)
    pub rows: Vec<MetricRow>,
}

impl TestRecord {
    /// Iterate over the packet-delay rows of this record
    pub fn delay_rows(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.rows.iter().filter_map(|row| match row {
            MetricRow::Delay { label, values } => Some((label.as_str(), values.as_slice())),
            _ => None,
        })
    }

    /// Check whether any row feeds the throughput reconstruction
    pub fn has_delay_samples(&self) -> bool {
        self.delay_rows().next().is_some()
    }
}
