//! Main application orchestration and execution

use crate::{
    analyzer::{self, ConsoleLine},
    chart::{chart_file_name, ScenarioChart},
    cli::Cli,
    config::{display_config_summary, load_config, validate_config},
    error::Result,
    logging::{LogLevel, Logger},
    models::Config,
    output::{OutputFormatter, OutputFormatterFactory},
    parser,
};
use std::collections::HashMap;
use std::path::PathBuf;

/// Main application struct that coordinates all components
pub struct App {
    cli: Cli,
}

/// Counters accumulated over one run, reported in verbose mode
#[derive(Debug, Default, Clone, Copy)]
struct RunSummary {
    files: usize,
    blocks: usize,
    records: usize,
    charts: usize,
}

impl App {
    /// Create a new application instance with CLI configuration
    pub fn new(cli: Cli) -> Result<Self> {
        Ok(Self { cli })
    }

    /// Run the application
    pub fn run(self) -> Result<()> {
        let config = load_config(self.cli.clone())?;

        colored::control::set_override(config.enable_color);

        let log_level = if config.debug {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        };
        let logger = Logger::new(log_level, config.enable_color);

        if config.debug {
            println!("{} v{}", crate::PKG_NAME, crate::VERSION);
            println!("Configuration Summary:");
            println!("{}", display_config_summary(&config));
        }

        let formatter = OutputFormatterFactory::create_formatter(config.enable_color);

        // Display validation warnings
        for warning in validate_config(&config) {
            eprintln!("{}", warning.format(config.enable_color));
        }

        if config.render_charts {
            std::fs::create_dir_all(&config.chart_dir).map_err(|e| {
                crate::error::AppError::io(format!(
                    "Failed to create chart directory {}: {}",
                    config.chart_dir.display(),
                    e
                ))
            })?;
        }

        let mut summary = RunSummary::default();
        for file in &config.input_files {
            summary.files += 1;
            self.analyze_file(file, &config, formatter.as_ref(), &logger, &mut summary)?;
        }

        if config.verbose {
            println!(
                "Analyzed {} file(s): {} scenario block(s), {} test record(s), {} chart(s) rendered",
                summary.files, summary.blocks, summary.records, summary.charts
            );
        }

        Ok(())
    }

    /// Analyze one log file: walk its scenario blocks and report each
    fn analyze_file(
        &self,
        path: &PathBuf,
        config: &Config,
        formatter: &dyn OutputFormatter,
        logger: &Logger,
        summary: &mut RunSummary,
    ) -> Result<()> {
        logger.debug("app", &format!("reading {}", path.display()));
        let lines = parser::read_lines(path)?;
        let blocks = parser::parse_file(&lines)?;

        let mut fields = HashMap::new();
        fields.insert("path".to_string(), serde_json::json!(path.display().to_string()));
        fields.insert("blocks".to_string(), serde_json::json!(blocks.len()));
        logger.log(LogLevel::Debug, "app", "file parsed", fields);

        for block in &blocks {
            summary.blocks += 1;
            let analysis = analyzer::analyze_block(block, config.confidence_level);

            let mut fields = HashMap::new();
            fields.insert("scenario".to_string(), serde_json::json!(analysis.scenario));
            fields.insert(
                "records".to_string(),
                serde_json::json!(analysis.records.len()),
            );
            logger.log(LogLevel::Debug, "app", "block analyzed", fields);

            let mut chart = ScenarioChart::new(&analysis.chart_title);

            for record in &analysis.records {
                summary.records += 1;

                for line in &record.console {
                    println!("{}", formatter.format_console_line(line));
                    if config.verbose {
                        if let ConsoleLine::Interval {
                            stats: Some(stats), ..
                        } = line
                        {
                            println!("{}", formatter.format_summary_stats(stats));
                        }
                    }
                }
                println!();

                for curve in &record.curves {
                    chart.add_curve(curve.clone());
                }
            }
            println!();

            if config.render_charts && !chart.is_empty() {
                let file_name = chart_file_name(summary.blocks, &analysis.scenario);
                let chart_path = config.chart_dir.join(file_name);
                chart.render(&chart_path)?;
                summary.charts += 1;
                println!("{}", formatter.format_chart_saved(&chart_path));
            }
        }

        Ok(())
    }
}
