//! Error types module
//!
//! This module provides the core error types used throughout the Shopdesk
//! application. All errors are unified under the `AppError` enum which can
//! represent API, validation, session-store, and rendering errors.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like a rejected request
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for surfacing an error to the operator.
///
/// Every request failure is caught at the call site and shown as a
/// non-blocking notice; this trait lets errors self-describe that notice.
pub trait NoticeMetadata {
    /// Message shown to the operator (may differ from the internal message)
    fn notice(&self) -> String;

    /// Whether re-triggering the action can reasonably succeed
    fn is_recoverable(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Session store error: {0}")]
    SessionStore(String),

    #[error("Label rendering error: {0}")]
    LabelRender(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::SessionStore(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SessionStore(format!("JSON parsing error: {}", err))
    }
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::LabelRender(err.to_string())
    }
}

/// Static metadata per variant: (recoverable, log_level).
/// The notice stays per-variant for dynamic content.
fn app_error_static_metadata(err: &AppError) -> (bool, LogLevel) {
    match err {
        AppError::Api { status, .. } => (*status >= 500, LogLevel::Warn),
        AppError::InvalidInput(_) => (false, LogLevel::Debug),
        AppError::NotFound(_) => (false, LogLevel::Debug),
        AppError::Unauthorized(_) => (false, LogLevel::Debug),
        AppError::Cancelled => (true, LogLevel::Debug),
        AppError::SessionStore(_) => (false, LogLevel::Error),
        AppError::LabelRender(_) => (false, LogLevel::Error),
        AppError::Internal(_) => (true, LogLevel::Error),
    }
}

impl NoticeMetadata for AppError {
    fn notice(&self) -> String {
        match self {
            // Backend-supplied message when there is one, generic otherwise
            AppError::Api { message, .. } if !message.is_empty() => message.clone(),
            AppError::Api { status, .. } => format!("Request failed (status {})", status),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Unauthorized(_) => "Sign in again to continue".to_string(),
            AppError::Cancelled => "The request was cancelled".to_string(),
            AppError::SessionStore(_) => "Could not read or write local session data".to_string(),
            AppError::LabelRender(_) => "Could not assemble the label document".to_string(),
            AppError::Internal(_) => "Something went wrong, try again".to_string(),
        }
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).0
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_uses_backend_message() {
        let err = AppError::Api {
            status: 422,
            message: "The name field is required.".to_string(),
        };
        assert_eq!(err.notice(), "The name field is required.");
        assert!(!err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Warn);
    }

    #[test]
    fn test_api_error_falls_back_to_generic_notice() {
        let err = AppError::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.notice(), "Request failed (status 500)");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_session_store_error_hides_details() {
        let err = AppError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        assert!(matches!(err, AppError::SessionStore(_)));
        assert_eq!(err.notice(), "Could not read or write local session data");
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_cancelled_is_recoverable() {
        let err = AppError::Cancelled;
        assert!(err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Debug);
    }
}
