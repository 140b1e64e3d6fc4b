//! Shared types and time-unit constants used across the analyzer

use serde::{Deserialize, Serialize};

// Re-export error types for convenient access
pub use crate::error::{AppError, Result};

/// Nanoseconds per microsecond
pub const MICROSECOND: u64 = 1_000;

/// Nanoseconds per millisecond
pub const MILLISECOND: u64 = 1_000 * MICROSECOND;

/// Nanoseconds per second
pub const SECOND: u64 = 1_000 * MILLISECOND;

/// Nanoseconds per minute
pub const MINUTE: u64 = 60 * SECOND;

/// Throughput curve resolution: buckets per second of simulated time
pub const BUCKETS_PER_SECOND: u64 = SECOND / MILLISECOND;

/// Classification of a metric row within a test record
///
/// Test records carry their rows positionally in the input format; parsing
/// assigns each row an explicit kind so downstream code never has to reason
/// about raw row indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricKind {
    /// Per-sample timestamps in nanoseconds (row index 1)
    Timestamps,
    /// Packet delay samples in nanoseconds, feeds the throughput curve
    PacketDelay,
    /// Retransmission counts per sample
    Retransmissions,
    /// Placeholder row whose values are recomputed, never read (row index 4)
    Throughput,
    /// Serial communication error counts (row index 5), diagnostic only
    SerialErrors,
}

impl MetricKind {
    /// Get the kind name used in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Timestamps => "timestamps",
            MetricKind::PacketDelay => "packet delay",
            MetricKind::Retransmissions => "retransmissions",
            MetricKind::Throughput => "throughput",
            MetricKind::SerialErrors => "serial errors",
        }
    }

    /// Whether rows of this kind are drawn on the scenario chart
    pub fn is_plotted(&self) -> bool {
        !matches!(self, MetricKind::Timestamps | MetricKind::SerialErrors)
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
