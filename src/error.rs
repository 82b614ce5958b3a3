//! Custom error types for Spendbook
//!
//! The ledger itself is tolerant and almost never fails; these errors cover
//! the I/O edges (durable map, settings, audit log, terminal events) and
//! input validation done by the command line and TUI before anything
//! reaches the store.

use thiserror::Error;

/// The main error type for Spendbook operations
#[derive(Error, Debug)]
pub enum SpendbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Input rejected at the presentation edge
    #[error("Validation error: {0}")]
    Validation(String),

    /// Durable map errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl SpendbookError {
    /// Create a validation error for an unknown category label
    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::Validation(format!(
            "Unknown category '{}'. Run 'spendbook categories' to list them.",
            category.into()
        ))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SpendbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<std::sync::mpsc::RecvError> for SpendbookError {
    fn from(_: std::sync::mpsc::RecvError) -> Self {
        Self::Tui("terminal event reader stopped".into())
    }
}

/// Result type alias for Spendbook operations
pub type SpendbookResult<T> = Result<T, SpendbookError>;
