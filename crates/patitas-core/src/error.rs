// Rust guideline compliant 2026-10-16

//! Error types for the Patitas core library.

use thiserror::Error;

/// Result type alias for Patitas core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Patitas core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input failed validation before any mutation was attempted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Lifecycle transition not permitted from the record's current status.
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),

    /// Configuration value is missing or malformed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
