//! Configuration loading, validation warnings, and display

pub mod env;
pub mod parser;

pub use env::EnvManager;
pub use parser::{load_config, ConfigParser};

use crate::models::Config;
use colored::*;

/// A non-fatal configuration concern surfaced before the run
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigWarning {
    /// Short description of the concern
    pub message: String,
}

impl ConfigWarning {
    fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Format the warning for display
    pub fn format(&self, enable_color: bool) -> String {
        if enable_color {
            format!("{} {}", "warning:".yellow().bold(), self.message)
        } else {
            format!("warning: {}", self.message)
        }
    }
}

/// Check a validated configuration for suspicious but legal settings
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.confidence_level < 0.5 {
        warnings.push(ConfigWarning::new(format!(
            "confidence level {} is unusually low; intervals will be very narrow",
            config.confidence_level
        )));
    }

    for file in &config.input_files {
        if !file.exists() {
            warnings.push(ConfigWarning::new(format!(
                "input file {} does not exist yet",
                file.display()
            )));
        }
    }

    if !config.render_charts && config.chart_dir != std::path::Path::new(crate::defaults::DEFAULT_CHART_DIR)
    {
        warnings.push(ConfigWarning::new(
            "--chart-dir has no effect when chart rendering is disabled",
        ));
    }

    warnings
}

/// Build a human-readable configuration summary
pub fn display_config_summary(config: &Config) -> String {
    let files: Vec<String> = config
        .input_files
        .iter()
        .map(|f| f.display().to_string())
        .collect();

    let mut summary = String::new();
    summary.push_str(&format!("  Input files: {}\n", files.join(", ")));
    summary.push_str(&format!(
        "  Confidence level: {:.0}%\n",
        config.confidence_level * 100.0
    ));
    summary.push_str(&format!("  Chart directory: {}\n", config.chart_dir.display()));
    summary.push_str(&format!("  Render charts: {}\n", config.render_charts));
    summary.push_str(&format!("  Colored output: {}\n", config.enable_color));
    summary.push_str(&format!("  Verbose mode: {}\n", config.verbose));
    summary
}
