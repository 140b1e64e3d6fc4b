//! Output formatting and display system
//!
//! Provides a flexible formatting layer for analysis results, supporting
//! colored and plain text output behind one trait.

mod colored;
mod formatter;

pub use colored::ColoredFormatter;
pub use formatter::{OutputFormatter, PlainFormatter};

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on color support and preferences
    pub fn create_formatter(enable_color: bool) -> Box<dyn OutputFormatter> {
        if enable_color {
            Box::new(ColoredFormatter::new())
        } else {
            Box::new(PlainFormatter::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConfidenceInterval;

    #[test]
    fn test_factory_selects_by_color_preference() {
        ::colored::control::set_override(false);
        let interval = ConfidenceInterval {
            level: 0.95,
            lower: 0.0,
            upper: 1.0,
        };
        // Both formatter flavors produce the same plain text when colors
        // are globally disabled.
        let plain = OutputFormatterFactory::create_formatter(false);
        let colored_fmt = OutputFormatterFactory::create_formatter(true);
        assert_eq!(
            plain.format_interval("x", &interval, None),
            colored_fmt.format_interval("x", &interval, None)
        );
    }
}
