//! Command-line interface module with topic-based help system

pub mod help;

pub use help::HelpSystem;

use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Simulation Log Analyzer - per-scenario statistics and charts from experiment logs
#[derive(Parser, Debug, Clone)]
#[command(name = "simlog-analyzer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log files to analyze
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Coverage mass for reported intervals (0 < value <= 1)
    #[arg(short, long, default_value_t = crate::defaults::DEFAULT_CONFIDENCE_LEVEL)]
    pub confidence: f64,

    /// Directory for rendered scenario charts
    #[arg(short = 'o', long, value_name = "DIR")]
    pub chart_dir: Option<PathBuf>,

    /// Skip chart rendering entirely
    #[arg(long)]
    pub no_charts: bool,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output with per-row summary statistics
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Show help for specific topic (format, stats, charts, output, config)
    #[arg(long, value_name = "TOPIC")]
    pub help_topic: Option<String>,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        // Check for conflicting color flags
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if !(self.confidence > 0.0 && self.confidence <= 1.0) {
            return Err(format!(
                "Confidence must lie in (0, 1], got {}",
                self.confidence
            ));
        }

        // Input files may also arrive via LOG_FILES; the merged
        // configuration enforces that at least one source is present.
        Ok(())
    }

    /// Check if help should be displayed for a specific topic
    pub fn should_show_topic_help(&self) -> bool {
        self.help_topic.is_some()
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            supports_color()
        }
    }

    /// Display help for the specified topic or main help
    pub fn display_help(&self) -> String {
        let help_system = HelpSystem::new();
        let use_colors = self.use_colors();

        if let Some(topic) = &self.help_topic {
            help_system
                .display_topic_help(topic, use_colors)
                .unwrap_or_else(|| {
                    format!(
                        "Unknown help topic: '{}'\n\nAvailable topics: format, stats, charts, output, config\n\n{}",
                        topic,
                        help_system.display_main_help(use_colors)
                    )
                })
        } else {
            help_system.display_main_help(use_colors)
        }
    }
}

/// Detect whether the terminal supports colored output
fn supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["sla"];
        full.extend(args);
        Cli::parse_from(full)
    }

    #[test]
    fn test_conflicting_color_flags() {
        let cli = parse(&["run.log", "--color", "--no-color"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_confidence_bounds() {
        assert!(parse(&["run.log", "--confidence", "0"]).validate().is_err());
        assert!(parse(&["run.log", "--confidence", "1.2"]).validate().is_err());
        assert!(parse(&["run.log", "--confidence", "0.99"]).validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["run.log"]);
        assert_eq!(cli.confidence, 0.95);
        assert!(!cli.no_charts);
        assert!(cli.chart_dir.is_none());
        assert_eq!(cli.files, vec![PathBuf::from("run.log")]);
    }

    #[test]
    fn test_topic_help_flag() {
        let cli = parse(&["--help-topic", "format"]);
        assert!(cli.should_show_topic_help());
        assert!(cli.display_help().contains("Scenario blocks"));
    }
}
