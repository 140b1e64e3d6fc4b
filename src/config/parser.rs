//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::Cli,
    config::env::EnvManager,
    error::Result,
    models::Config,
};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        // Start with default configuration
        let mut config = Config::default();

        // Load from environment file if it exists
        EnvManager::load_env_file(self.cli.debug)?;

        // Merge environment variables into config
        config.merge_from_env()?;

        // Override with CLI arguments
        self.apply_cli_overrides(&mut config);

        // Validate the final configuration
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) {
        if !self.cli.files.is_empty() {
            config.input_files = self.cli.files.clone();
        }

        if (self.cli.confidence - crate::defaults::DEFAULT_CONFIDENCE_LEVEL).abs() > f64::EPSILON {
            config.confidence_level = self.cli.confidence;
        }

        if let Some(ref dir) = self.cli.chart_dir {
            config.chart_dir = dir.clone();
        }

        if self.cli.no_charts {
            config.render_charts = false;
        }

        if self.cli.color {
            config.enable_color = true;
        }
        if self.cli.no_color {
            config.enable_color = false;
        }

        // Verbose and debug are CLI-only flags
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;

        if config.debug {
            println!(
                "Applied CLI overrides: confidence={}, chart_dir={}, render_charts={}",
                config.confidence_level,
                config.chart_dir.display(),
                config.render_charts
            );
        }
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    ConfigParser::new(cli).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["sla"];
        full.extend(args);
        Cli::parse_from(full)
    }

    #[test]
    fn test_cli_overrides_take_precedence() {
        let mut config = Config::default();
        let parser = ConfigParser::new(cli(&[
            "run.log",
            "--confidence",
            "0.9",
            "--chart-dir",
            "out",
            "--no-charts",
            "--no-color",
        ]));
        parser.apply_cli_overrides(&mut config);

        assert_eq!(config.input_files, vec![PathBuf::from("run.log")]);
        assert_eq!(config.confidence_level, 0.9);
        assert_eq!(config.chart_dir, PathBuf::from("out"));
        assert!(!config.render_charts);
        assert!(!config.enable_color);
    }

    #[test]
    fn test_defaults_survive_empty_cli() {
        let mut config = Config::default();
        let parser = ConfigParser::new(cli(&["run.log"]));
        parser.apply_cli_overrides(&mut config);

        assert_eq!(config.confidence_level, 0.95);
        assert!(config.render_charts);
    }
}
