//! Topic-based command-line help with examples and format documentation

use crate::config::env::EnvManager;
use colored::*;

/// Help system for the CLI application
pub struct HelpSystem;

impl HelpSystem {
    /// Create a new help system
    pub fn new() -> Self {
        Self
    }

    /// Display the main help message with all available options
    pub fn display_main_help(&self, use_colors: bool) -> String {
        let mut help = String::new();

        help.push_str(&self.heading("Simulation Log Analyzer", use_colors));
        help.push_str(
            "\nParses network-simulation experiment logs, prints per-scenario coverage\n\
             intervals for throughput, packet delay and retransmissions, and renders\n\
             one comparative chart per scenario block.\n\n",
        );

        help.push_str(&self.heading("USAGE", use_colors));
        help.push_str("\n  sla [OPTIONS] <FILE>...\n\n");

        help.push_str(&self.heading("EXAMPLES", use_colors));
        help.push_str(
            "\n  sla results/run1.log\n\
             \x20 sla --confidence 0.99 --chart-dir out results/*.log\n\
             \x20 sla --no-charts --no-color results/run1.log\n\n",
        );

        help.push_str(&self.heading("TOPICS", use_colors));
        help.push_str(
            "\n  --help-topic format   Input file format\n\
             \x20 --help-topic stats    Interval estimation\n\
             \x20 --help-topic charts   Chart rendering\n\
             \x20 --help-topic output   Console output format\n\
             \x20 --help-topic config   Environment configuration\n",
        );

        help
    }

    /// Display quick help for specific topics
    pub fn display_topic_help(&self, topic: &str, use_colors: bool) -> Option<String> {
        match topic.to_lowercase().as_str() {
            "format" => Some(self.format_topic(use_colors)),
            "stats" => Some(self.stats_topic(use_colors)),
            "charts" => Some(self.charts_topic(use_colors)),
            "output" => Some(self.output_topic(use_colors)),
            "config" => Some(self.config_topic(use_colors)),
            _ => None,
        }
    }

    fn heading(&self, text: &str, use_colors: bool) -> String {
        if use_colors {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn format_topic(&self, use_colors: bool) -> String {
        format!(
            "{}\n\n\
             Scenario blocks are separated by blank lines. Each test record is a\n\
             title line followed by comma-separated metric rows:\n\n\
             \x20 1. \"<Label> (<Description>: <load>)\"\n\
             \x20 2. \"<name>,<ts0>,<ts1>,...\"        timestamps in nanoseconds\n\
             \x20 3. metric row (delay or retransmissions)\n\
             \x20 4. metric row (delay or retransmissions)\n\
             \x20 5. throughput placeholder (values recomputed, never read)\n\
             \x20 6. \"<label>,<int>,...\"             serial error counts\n\n\
             A row whose bracketed unit mentions \"ns\" must be labeled\n\
             \"Packet delay\" and feeds the reconstructed throughput curve.\n\
             Records are separated by blank lines; a second blank line ends\n\
             the block. Malformed input aborts the whole analysis.\n",
            self.heading("INPUT FORMAT", use_colors)
        )
    }

    fn stats_topic(&self, use_colors: bool) -> String {
        format!(
            "{}\n\n\
             Intervals are empirical: samples are sorted and the reported bounds\n\
             are actual data points covering the requested mass (default 95%).\n\
             NaN samples are ignored. --confidence adjusts the mass; 1.0 yields\n\
             the sample extremes.\n",
            self.heading("INTERVAL ESTIMATION", use_colors)
        )
    }

    fn charts_topic(&self, use_colors: bool) -> String {
        format!(
            "{}\n\n\
             One 1200x800 PNG per scenario block, written to the chart directory\n\
             (default \"charts\"). All records of a block overlay on shared axes:\n\
             x = Time [s], y = Measurement [b/ms], [s] or [#]. --no-charts skips\n\
             rendering; the console summaries still print.\n",
            self.heading("CHART RENDERING", use_colors)
        )
    }

    fn output_topic(&self, use_colors: bool) -> String {
        format!(
            "{}\n\n\
             Per metric row:\n\
             \x20 <row-label> <title>  95% of the data is within  (<lower>, <upper>)\n\
             The throughput line carries a b/s suffix. Serial error counts print as:\n\
             \x20 # serial comm. errors  <title> :  [<values>]\n\
             --verbose adds per-row summary statistics under each line.\n",
            self.heading("CONSOLE OUTPUT", use_colors)
        )
    }

    fn config_topic(&self, use_colors: bool) -> String {
        format!(
            "{}\n\n\
             Configuration merges defaults, a .env file, environment variables,\n\
             and CLI flags, in that order.\n\n{}",
            self.heading("CONFIGURATION", use_colors),
            EnvManager::create_example_env_content()
        )
    }
}

impl Default for HelpSystem {
    fn default() -> Self {
        Self::new()
    }
}
