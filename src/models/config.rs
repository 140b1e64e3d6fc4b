//! Configuration data model and validation

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log files to analyze, in order
    #[serde(default)]
    pub input_files: Vec<PathBuf>,

    /// Coverage mass for reported intervals (e.g. 0.95 for 95%)
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,

    /// Directory for rendered scenario charts
    #[serde(default = "default_chart_dir")]
    pub chart_dir: PathBuf,

    /// Whether to render charts at all
    #[serde(default = "default_render_charts")]
    pub render_charts: bool,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_files: Vec::new(),
            confidence_level: default_confidence_level(),
            chart_dir: default_chart_dir(),
            render_charts: default_render_charts(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge supported environment variables into this configuration
    ///
    /// Recognized variables: `LOG_FILES` (comma-separated paths),
    /// `CONFIDENCE_LEVEL`, `CHART_DIR`, `RENDER_CHARTS`, `ENABLE_COLOR`.
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(files) = std::env::var("LOG_FILES") {
            self.input_files = files
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .collect();
        }

        if let Ok(level) = std::env::var("CONFIDENCE_LEVEL") {
            self.confidence_level = level.trim().parse::<f64>().map_err(|e| {
                AppError::config(format!("Invalid CONFIDENCE_LEVEL '{}': {}", level, e))
            })?;
        }

        if let Ok(dir) = std::env::var("CHART_DIR") {
            if !dir.trim().is_empty() {
                self.chart_dir = PathBuf::from(dir.trim());
            }
        }

        if let Ok(render) = std::env::var("RENDER_CHARTS") {
            self.render_charts = parse_bool("RENDER_CHARTS", &render)?;
        }

        if let Ok(color) = std::env::var("ENABLE_COLOR") {
            self.enable_color = parse_bool("ENABLE_COLOR", &color)?;
        }

        Ok(())
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.input_files.is_empty() {
            return Err(AppError::config(
                "No input files specified (pass file paths or set LOG_FILES)",
            ));
        }

        if !(self.confidence_level > 0.0 && self.confidence_level <= 1.0) {
            return Err(AppError::config(format!(
                "Confidence level must lie in (0, 1], got {}",
                self.confidence_level
            )));
        }

        if self.render_charts && self.chart_dir.as_os_str().is_empty() {
            return Err(AppError::config("Chart directory cannot be empty"));
        }

        Ok(())
    }
}

/// Parse a boolean environment value
fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(AppError::config(format!(
            "Invalid boolean for {}: '{}'",
            name, value
        ))),
    }
}

fn default_confidence_level() -> f64 {
    crate::defaults::DEFAULT_CONFIDENCE_LEVEL
}

fn default_chart_dir() -> PathBuf {
    PathBuf::from(crate::defaults::DEFAULT_CHART_DIR)
}

fn default_render_charts() -> bool {
    true
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}
