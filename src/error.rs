//! Error handling module for the tester
//!
//! Centralized error types using thiserror. Field-level validation
//! failures are deliberately NOT here: those are data (see
//! `validation::FieldError`) returned to the caller for display, not
//! failures of the program itself.

use thiserror::Error;

/// Main error type for the application shell.
#[derive(Error, Debug)]
pub enum SnmpTesterError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for tester operations
pub type Result<T> = std::result::Result<T, SnmpTesterError>;

// Convenient error constructors
impl SnmpTesterError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

/// Helper function to create general errors
pub fn general_error(msg: impl Into<String>) -> SnmpTesterError {
    SnmpTesterError::General(msg.into())
}
