//! Custom error types for jobpilot
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// Main error type for jobpilot operations
#[derive(Error, Debug)]
pub enum PilotError {
    /// Reasoning service connection or API errors
    #[error("Reasoning service error: {0}")]
    Reasoning(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Agent contract violations (programming defects, not runtime conditions)
    #[error("Agent contract violation: {0}")]
    Contract(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Model not available
    #[error("Model '{0}' not available in Ollama. Run: ollama pull {0}")]
    ModelNotFound(String),

    /// Generic error for other cases
    #[error("{0}")]
    Other(String),
}

/// Convenience Result type for jobpilot operations
pub type Result<T> = std::result::Result<T, PilotError>;

impl PilotError {
    /// Create a reasoning service error
    pub fn reasoning(msg: impl Into<String>) -> Self {
        Self::Reasoning(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a contract violation error
    pub fn contract(msg: impl Into<String>) -> Self {
        Self::Contract(msg.into())
    }
}
