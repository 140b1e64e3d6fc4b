//! Measurement metrics: throughput reconstruction and summary statistics

use crate::stats;
use crate::types::{BUCKETS_PER_SECOND, MINUTE, SECOND};
use serde::{Deserialize, Serialize};

/// Reconstructed per-millisecond throughput curve
///
/// The curve covers 60 seconds of simulated time at millisecond resolution.
/// Each packet-delay sample contributes its inverse duration to every
/// millisecond bucket the delay interval touches, so overlapping packets
/// stack into a rate estimate. The raw values of the throughput row in the
/// input are never read; the curve always replaces them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThroughputCurve {
    buckets: Vec<f64>,
}

impl ThroughputCurve {
    /// Number of millisecond buckets: 60 seconds at 1000 buckets/second
    pub const BUCKET_COUNT: usize = (MINUTE / SECOND) as usize * BUCKETS_PER_SECOND as usize;

    /// Create an empty curve
    pub fn new() -> Self {
        Self {
            buckets: vec![0.0; Self::BUCKET_COUNT],
        }
    }

    /// Accumulate one packet-delay sample into the curve
    ///
    /// `start_s` is the sample's send time and `delay_s` its delay, both in
    /// seconds. The inclusive bucket range [floor(start*1000),
    /// floor((start+delay)*1000)] each receive `1/span` (or 1 when the
    /// sample stays within a single bucket). Ranges extending past the
    /// 60-second window clamp to the curve bounds.
    pub fn accumulate(&mut self, start_s: f64, delay_s: f64) {
        let scale = BUCKETS_PER_SECOND as f64;
        let start_bucket = (start_s * scale).floor() as i64;
        let end_bucket = ((start_s + delay_s) * scale).floor() as i64;

        let weight = if end_bucket > start_bucket {
            1.0 / (end_bucket - start_bucket) as f64
        } else {
            1.0
        };

        let last = Self::BUCKET_COUNT as i64 - 1;
        let from = start_bucket.clamp(0, last) as usize;
        let to = end_bucket.clamp(0, last) as usize;
        if end_bucket < 0 || start_bucket > last {
            return;
        }

        for bucket in &mut self.buckets[from..=to] {
            *bucket += weight;
        }
    }

    /// Scale the whole curve, applied once per delay row with the record's load
    pub fn scale(&mut self, factor: f64) {
        for bucket in &mut self.buckets {
            *bucket *= factor;
        }
    }

    /// Get the per-bucket curve values in b/ms
    pub fn values(&self) -> &[f64] {
        &self.buckets
    }

    /// Get the curve values rescaled to b/s for interval reporting
    pub fn values_per_second(&self) -> Vec<f64> {
        let scale = (SECOND / crate::types::MILLISECOND) as f64;
        self.buckets.iter().map(|v| v * scale).collect()
    }

    /// Synthetic x-axis: evenly spaced sample times over the 0-60 s window
    pub fn time_axis(&self) -> Vec<f64> {
        let n = self.buckets.len();
        if n <= 1 {
            return vec![0.0; n];
        }
        let span = (MINUTE / SECOND) as f64;
        (0..n).map(|i| i as f64 * span / (n - 1) as f64).collect()
    }
}

impl Default for ThroughputCurve {
    fn default() -> Self {
        Self::new()
    }
}

/// Empirical coverage interval over observed samples
///
/// Bounds are always actual data points; see [`stats::confidence_interval`]
/// for the estimation procedure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Requested coverage mass, e.g. 0.95
    pub level: f64,
    /// Lower bound
    pub lower: f64,
    /// Upper bound
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Compute the empirical interval for the given coverage mass
    pub fn compute(level: f64, values: &[f64]) -> Self {
        let (lower, upper) = stats::confidence_interval(level, values);
        Self {
            level,
            lower,
            upper,
        }
    }

    /// Check whether a value lies within the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl std::fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.lower, self.upper)
    }
}

/// Basic summary statistics over a sample sequence, NaN-filtered
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of non-NaN samples
    pub count: usize,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation
    pub std_dev: f64,
}

impl SummaryStats {
    /// Calculate summary statistics from raw samples, ignoring NaNs
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let clean: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        if clean.is_empty() {
            return None;
        }

        let count = clean.len();
        let min = clean.iter().copied().fold(f64::INFINITY, f64::min);
        let max = clean.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = clean.iter().sum::<f64>() / count as f64;
        let std_dev = if count > 1 {
            let variance =
                clean.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
            variance.sqrt()
        } else {
            0.0
        };

        Some(Self {
            count,
            min,
            max,
            mean,
            std_dev,
        })
    }
}
