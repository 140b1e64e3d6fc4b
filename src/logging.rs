//! Structured logging for the simulation log analyzer
//!
//! Provides leveled, structured log entries with chrono timestamps and
//! optional JSON output for log aggregators. The pipeline is fully
//! synchronous, so the writer sits behind a plain mutex.

use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::sync::Mutex;

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    /// Trace level - most detailed
    Trace = 0,
    /// Debug level - detailed information for debugging
    Debug = 1,
    /// Info level - general application information
    Info = 2,
    /// Warning level - potentially harmful situations
    Warn = 3,
    /// Error level - error events
    Error = 4,
}

impl LogLevel {
    /// Get log level name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Get ANSI color code for console output
    pub fn color_code(&self) -> &'static str {
        match self {
            LogLevel::Trace => "\x1b[37m",
            LogLevel::Debug => "\x1b[36m",
            LogLevel::Info => "\x1b[32m",
            LogLevel::Warn => "\x1b[33m",
            LogLevel::Error => "\x1b[31m",
        }
    }

    /// Reset ANSI color code
    pub fn reset_code() -> &'static str {
        "\x1b[0m"
    }
}

impl std::str::FromStr for LogLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(AppError::parse(format!("Invalid log level: {}", s))),
        }
    }
}

/// Log entry structure for structured logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Timestamp when the entry was created
    pub timestamp: DateTime<Utc>,
    /// Log level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Logger name/component
    pub logger: String,
    /// Additional structured fields
    pub fields: HashMap<String, serde_json::Value>,
}

/// Logger with text or JSON output behind a shared writer
pub struct Logger {
    /// Minimum log level to output
    min_level: LogLevel,
    /// Whether to use colored output
    use_colors: bool,
    /// Emit entries as JSON lines instead of text
    json_output: bool,
    /// Output destination
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    /// Create a logger writing to stderr
    pub fn new(min_level: LogLevel, use_colors: bool) -> Self {
        Self {
            min_level,
            use_colors,
            json_output: false,
            writer: Mutex::new(Box::new(std::io::stderr())),
        }
    }

    /// Create a logger with a custom writer, used by tests
    pub fn with_writer(min_level: LogLevel, writer: Box<dyn Write + Send>) -> Self {
        Self {
            min_level,
            use_colors: false,
            json_output: false,
            writer: Mutex::new(writer),
        }
    }

    /// Switch the logger to JSON line output
    pub fn json(mut self) -> Self {
        self.json_output = true;
        self
    }

    /// Emit a log entry if it passes the level filter
    pub fn log(
        &self,
        level: LogLevel,
        logger: &str,
        message: &str,
        fields: HashMap<String, serde_json::Value>,
    ) {
        if level < self.min_level {
            return;
        }

        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
            logger: logger.to_string(),
            fields,
        };

        let line = if self.json_output {
            serde_json::to_string(&entry).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
        } else {
            self.format_text(&entry)
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    /// Format an entry as a single text line
    fn format_text(&self, entry: &LogEntry) -> String {
        let level = if self.use_colors {
            format!(
                "{}{}{}",
                entry.level.color_code(),
                entry.level.as_str(),
                LogLevel::reset_code()
            )
        } else {
            entry.level.as_str().to_string()
        };

        let mut line = format!(
            "{} {:>5} [{}] {}",
            entry.timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            level,
            entry.logger,
            entry.message
        );

        if !entry.fields.is_empty() {
            let mut keys: Vec<&String> = entry.fields.keys().collect();
            keys.sort();
            for key in keys {
                line.push_str(&format!(" {}={}", key, entry.fields[key]));
            }
        }

        line
    }

    /// Log a debug message without extra fields
    pub fn debug(&self, logger: &str, message: &str) {
        self.log(LogLevel::Debug, logger, message, HashMap::new());
    }

    /// Log an info message without extra fields
    pub fn info(&self, logger: &str, message: &str) {
        self.log(LogLevel::Info, logger, message, HashMap::new());
    }
}
