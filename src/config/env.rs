//! Environment variable handling and .env file management

use crate::error::{AppError, Result};
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file if it exists
    pub fn load_env_file(debug: bool) -> Result<()> {
        if Path::new(".env").exists() {
            dotenv::from_filename(".env")
                .map_err(|e| AppError::config(format!("Failed to load .env file: {}", e)))?;

            if debug {
                println!("Loaded configuration from .env file");
            }
        } else if debug {
            println!("No .env file found, using defaults and CLI arguments");
        }

        Ok(())
    }

    /// Create example .env file content
    pub fn create_example_env_content() -> String {
        r#"# Simulation Log Analyzer Configuration
#
# This file contains environment variables that can be used to configure
# the analyzer. Values specified here are used as defaults and can be
# overridden by command-line arguments.

# Log files to analyze (comma-separated paths)
# LOG_FILES=results/run1.log,results/run2.log

# Coverage mass for reported intervals (0 < value <= 1)
# CONFIDENCE_LEVEL=0.95

# Directory for rendered scenario charts
# CHART_DIR=charts

# Render charts (true/false)
# RENDER_CHARTS=true

# Enable colored output (true/false)
# ENABLE_COLOR=true
"#
        .to_string()
    }

}
