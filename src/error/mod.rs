//! Error handling for the simulation log analyzer

use thiserror::Error;

/// Custom error types for the simulation log analyzer
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(String),

    /// Parsing errors (record titles, numeric columns, etc.)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// Structural precondition failures (too few lines in a block/record)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Statistics calculation errors
    #[error("Statistics error: {0}")]
    Statistics(String),

    /// Chart rendering errors
    #[error("Chart error: {0}")]
    Chart(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new statistics error
    pub fn statistics<S: Into<String>>(message: S) -> Self {
        Self::Statistics(message.into())
    }

    /// Create a new chart error
    pub fn chart<S: Into<String>>(message: S) -> Self {
        Self::Chart(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Io(_) => "IO",
            Self::Parse(_) => "PARSE",
            Self::Validation(_) => "VALIDATION",
            Self::Statistics(_) => "STATS",
            Self::Chart(_) => "CHART",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Check if error is recoverable
    ///
    /// Malformed input terminates the whole analysis; nothing in the
    /// taxonomy is retried.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Get process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Io(_) => 3,
            Self::Parse(_) => 4,
            Self::Validation(_) => 5,
            Self::Statistics(_) => 6,
            Self::Chart(_) => 7,
            Self::Internal(_) => 1,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::Parse(format!("Invalid integer: {}", error))
    }
}

impl From<std::num::ParseFloatError> for AppError {
    fn from(error: std::num::ParseFloatError) -> Self {
        Self::Parse(format!("Invalid number: {}", error))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(format!("JSON error: {}", error))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Internal(error.to_string())
    }
}
