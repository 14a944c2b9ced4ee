//! Error types for the cutline processing pipeline
//!
//! All failures are fatal to a single run. Variants carry enough context
//! (HTTP status codes, response bodies, file paths) for a human-readable
//! diagnostic at the CLI boundary; nothing is retried or recovered locally.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Convenient result type used throughout the crate
pub type Result<T> = std::result::Result<T, CutlineError>;

/// Errors produced while turning a source image into an outlined PNG
#[derive(Debug, Error)]
pub enum CutlineError {
    /// The source image could not be retrieved or decoded
    #[error("image retrieval failed: {message}")]
    Retrieval {
        /// Human-readable description of the failure
        message: String,
        /// HTTP status code, when the failure came from a remote source
        status: Option<u16>,
    },

    /// The background-removal service returned a non-success status
    #[error("background removal failed: HTTP {status}: {body}")]
    BackgroundRemoval {
        /// HTTP status code returned by the service
        status: u16,
        /// Response body text, kept verbatim for diagnostics
        body: String,
    },

    /// A filesystem operation failed
    #[error("failed to {operation} at {}: {source}", .path.display())]
    FileIo {
        /// What was being attempted (e.g. "write output image")
        operation: String,
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration parameters failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Image encoding, decoding, or a pipeline stage failed
    #[error("processing error: {0}")]
    Processing(String),

    /// Transport-level network failure (before any HTTP status was seen)
    #[error("network error: {message}")]
    Network {
        /// Human-readable description of the failure
        message: String,
        /// Underlying client error, when available
        #[source]
        source: Option<reqwest::Error>,
    },
}

impl CutlineError {
    /// Create a retrieval error with a descriptive message
    pub fn retrieval(message: impl Into<String>) -> Self {
        Self::Retrieval {
            message: message.into(),
            status: None,
        }
    }

    /// Create a retrieval error from a non-success HTTP status
    pub fn retrieval_status(status: reqwest::StatusCode) -> Self {
        Self::Retrieval {
            message: format!("HTTP {status}"),
            status: Some(status.as_u16()),
        }
    }

    /// Create a background-removal error carrying status code and body text
    pub fn background_removal(status: u16, body: impl Into<String>) -> Self {
        Self::BackgroundRemoval {
            status,
            body: body.into(),
        }
    }

    /// Create a file I/O error with operation and path context
    pub fn file_io_error(
        operation: impl Into<String>,
        path: impl AsRef<Path>,
        source: std::io::Error,
    ) -> Self {
        Self::FileIo {
            operation: operation.into(),
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an invalid-configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Create a processing error
    pub fn processing(message: impl Into<String>) -> Self {
        Self::Processing(message.into())
    }

    /// Create a network error wrapping a client failure
    pub fn network_error(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(source),
        }
    }

    /// HTTP status associated with this error, if any
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Retrieval { status, .. } => *status,
            Self::BackgroundRemoval { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_removal_display_carries_status_and_body() {
        let err = CutlineError::background_removal(403, "{\"errors\":[{\"title\":\"Forbidden\"}]}");
        let msg = err.to_string();
        assert!(msg.contains("403"));
        assert!(msg.contains("Forbidden"));
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn test_retrieval_status() {
        let err = CutlineError::retrieval_status(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_file_io_error_includes_path_and_operation() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CutlineError::file_io_error("write output image", "processed_images/cat.png", io);
        let msg = err.to_string();
        assert!(msg.contains("write output image"));
        assert!(msg.contains("processed_images"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_invalid_config_display() {
        let err = CutlineError::invalid_config("blur radius must be odd");
        assert!(err.to_string().contains("blur radius must be odd"));
    }
}
