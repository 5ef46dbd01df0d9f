//! Error types for the throttle crate

use thiserror::Error;

/// Result type alias for the throttle crate
pub type Result<T> = std::result::Result<T, ThrottleError>;

/// Main error type for the throttle crate
#[derive(Error, Debug)]
pub enum ThrottleError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed replay events
    #[error("Invalid event on line {line}: {message}")]
    InvalidEvent { line: usize, message: String },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
