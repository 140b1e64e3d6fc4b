//! Core formatting traits and the plain text implementation

use crate::{
    analyzer::ConsoleLine,
    models::{ConfidenceInterval, SummaryStats},
};
use std::path::Path;

/// Main trait for output formatting
pub trait OutputFormatter {
    /// Format a coverage interval summary line
    fn format_interval(
        &self,
        label: &str,
        interval: &ConfidenceInterval,
        unit: Option<&str>,
    ) -> String;

    /// Format the serial communication error diagnostic line
    fn format_serial_errors(&self, title: &str, values: &[i64]) -> String;

    /// Format verbose summary statistics for one metric row
    fn format_summary_stats(&self, stats: &SummaryStats) -> String;

    /// Format the chart-saved notice
    fn format_chart_saved(&self, path: &Path) -> String;

    /// Format one analyzer console line, dispatching on its kind
    fn format_console_line(&self, line: &ConsoleLine) -> String {
        match line {
            ConsoleLine::Interval {
                label,
                interval,
                unit,
                ..
            } => self.format_interval(label, interval, unit.as_deref()),
            ConsoleLine::SerialErrors { title, values } => {
                self.format_serial_errors(title, values)
            }
        }
    }
}

/// Plain text formatter implementation
pub struct PlainFormatter;

impl PlainFormatter {
    /// Create a new plain formatter
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_interval(
        &self,
        label: &str,
        interval: &ConfidenceInterval,
        unit: Option<&str>,
    ) -> String {
        let mass = format!("{:.0}%", interval.level * 100.0);
        match unit {
            Some(unit) => format!(
                "{}  {} of the data is within  {} {}",
                label, mass, interval, unit
            ),
            None => format!("{}  {} of the data is within  {}", label, mass, interval),
        }
    }

    fn format_serial_errors(&self, title: &str, values: &[i64]) -> String {
        let joined = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        format!("# serial comm. errors  {} :  [{}]", title, joined)
    }

    fn format_summary_stats(&self, stats: &SummaryStats) -> String {
        format!(
            "    n={} min={:.6} max={:.6} mean={:.6} std_dev={:.6}",
            stats.count, stats.min, stats.max, stats.mean, stats.std_dev
        )
    }

    fn format_chart_saved(&self, path: &Path) -> String {
        format!("Chart saved: {}", path.display())
    }
}
