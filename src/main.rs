//! Simulation Log Analyzer - Main CLI Application
//!
//! Parses network-simulation experiment logs, prints per-scenario coverage
//! intervals and renders comparative charts.

use clap::Parser;
use simlog_analyzer::{
    app::App,
    cli::Cli,
    error::AppError,
};
use std::{error::Error, process};

fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    // Parse command line arguments
    let cli = Cli::parse();

    if let Err(message) = cli.validate() {
        eprintln!("Error: {}", message);
        process::exit(2);
    }

    // Topic help short-circuits the analysis
    if cli.should_show_topic_help() {
        println!("{}", cli.display_help());
        return;
    }

    if let Err(e) = run_application(cli) {
        eprintln!("Error: {}", e);

        if let Some(source) = e.source() {
            eprintln!("Caused by: {}", source);
        }

        // Print suggestions for common errors
        print_error_suggestions(&e);

        process::exit(e.exit_code());
    }
}

/// Main application logic
fn run_application(cli: Cli) -> simlog_analyzer::Result<()> {
    App::new(cli)?.run()
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Pass at least one log file, or set LOG_FILES in the environment");
            eprintln!("  - Confidence must lie in (0, 1]");
            eprintln!("  - Check your .env file format (see --help-topic config)");
        }
        AppError::Io(_) => {
            eprintln!();
            eprintln!("I/O troubleshooting:");
            eprintln!("  - Verify the input file paths exist and are readable");
            eprintln!("  - Check write permissions on the chart directory");
        }
        AppError::Parse(_) | AppError::Validation(_) => {
            eprintln!();
            eprintln!("Input format help:");
            eprintln!("  - Records need a title line like \"Scenario (description: 10)\"");
            eprintln!("  - Metric rows are comma-separated with a leading label cell");
            eprintln!("  - See --help-topic format for the full layout");
        }
        AppError::Chart(_) => {
            eprintln!();
            eprintln!("Chart troubleshooting:");
            eprintln!("  - Use --no-charts to run the analysis without rendering");
            eprintln!("  - Check the chart directory with --chart-dir");
        }
        _ => {}
    }
}
