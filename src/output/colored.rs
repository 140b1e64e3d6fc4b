//! Colored formatter implementation with terminal color support

use super::formatter::OutputFormatter;
use crate::models::{ConfidenceInterval, SummaryStats};
use colored::*;
use std::path::Path;

/// Color scheme configuration
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub label: Color,
    pub interval: Color,
    pub diagnostic: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            label: Color::White,
            interval: Color::Yellow,
            diagnostic: Color::Magenta,
            success: Color::Green,
            error: Color::Red,
            muted: Color::BrightBlack,
        }
    }
}

/// Rich colored output formatter
pub struct ColoredFormatter {
    scheme: ColorScheme,
}

impl ColoredFormatter {
    /// Create a new colored formatter with the default scheme
    pub fn new() -> Self {
        Self {
            scheme: ColorScheme::default(),
        }
    }
}

impl Default for ColoredFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_interval(
        &self,
        label: &str,
        interval: &ConfidenceInterval,
        unit: Option<&str>,
    ) -> String {
        let mass = format!("{:.0}%", interval.level * 100.0);
        let bounds = interval.to_string().color(self.scheme.interval);
        match unit {
            Some(unit) => format!(
                "{}  {} of the data is within  {} {}",
                label.color(self.scheme.label).bold(),
                mass,
                bounds,
                unit
            ),
            None => format!(
                "{}  {} of the data is within  {}",
                label.color(self.scheme.label).bold(),
                mass,
                bounds
            ),
        }
    }

    fn format_serial_errors(&self, title: &str, values: &[i64]) -> String {
        let joined = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let total: i64 = values.iter().sum();
        let counts = format!("[{}]", joined);
        let counts = if total > 0 {
            counts.color(self.scheme.error)
        } else {
            counts.color(self.scheme.diagnostic)
        };
        format!("# serial comm. errors  {} :  {}", title, counts)
    }

    fn format_summary_stats(&self, stats: &SummaryStats) -> String {
        format!(
            "    n={} min={:.6} max={:.6} mean={:.6} std_dev={:.6}",
            stats.count, stats.min, stats.max, stats.mean, stats.std_dev
        )
        .color(self.scheme.muted)
        .to_string()
    }

    fn format_chart_saved(&self, path: &Path) -> String {
        format!(
            "{} {}",
            "Chart saved:".color(self.scheme.success),
            path.display()
        )
    }
}
