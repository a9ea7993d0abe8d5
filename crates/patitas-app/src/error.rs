// Rust guideline compliant 2026-10-16

//! Error handling for Patitas application services.

use patitas_core::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and notification output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Input failed validation; nothing was sent.
    InvalidInput,
    /// The lifecycle transition is not legal from the current status.
    InvalidTransition,
    /// The adoption service could not be reached.
    NetworkUnavailable,
    /// The adoption service refused a well-formed request.
    RemoteRejected,
    /// The adoption service answered with an unexpected shape.
    MalformedResponse,
    /// Configuration is invalid.
    ConfigError,
    /// Local IO failure.
    IoError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The transport could not reach the store.
    #[error("Adoption service unavailable: {0}")]
    NetworkUnavailable(String),

    /// The store answered a well-formed request with a non-success status.
    #[error("Request rejected by adoption service ({status}): {message}")]
    RemoteRejected {
        /// HTTP status code.
        status: u16,
        /// Server-provided message, or a generic one.
        message: String,
    },

    /// The response did not have the expected record/array shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::NetworkUnavailable(_) => ErrorCode::NetworkUnavailable,
            AppError::RemoteRejected { .. } => ErrorCode::RemoteRejected,
            AppError::MalformedResponse(_) => ErrorCode::MalformedResponse,
            AppError::Core(core) => match core {
                CoreError::InvalidInput(_) => ErrorCode::InvalidInput,
                CoreError::InvalidTransition(_) => ErrorCode::InvalidTransition,
                CoreError::Config(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::MalformedResponse,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::RemoteRejected { status, .. } => Some(serde_json::json!({
                "status": status,
            })),
            _ => None,
        }
    }

    /// Whether retrying the same request may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::NetworkUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_keep_their_code() {
        let err: AppError = CoreError::InvalidTransition("no".to_string()).into();
        assert_eq!(err.code(), ErrorCode::InvalidTransition);
        assert!(!err.is_retryable());

        let err: AppError = CoreError::InvalidInput("age".to_string()).into();
        assert_eq!(err.code(), ErrorCode::InvalidInput);
    }

    #[test]
    fn test_only_network_errors_are_retryable() {
        assert!(AppError::NetworkUnavailable("refused".to_string()).is_retryable());
        let rejected = AppError::RemoteRejected {
            status: 400,
            message: "bad".to_string(),
        };
        assert!(!rejected.is_retryable());
        assert_eq!(rejected.details(), Some(serde_json::json!({ "status": 400 })));
    }
}
