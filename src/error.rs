//! Error types for the Corrigo library.
//!
//! All failures are represented by the [`CorrigoError`] enum. HTTP transport
//! failures and non-success API responses are distinct variants so callers can
//! tell "the network broke" apart from "the service said no" — there is no
//! sentinel boolean anywhere in this crate; fallible operations return
//! [`Result`].
//!
//! # Examples
//!
//! ```
//! use corrigo::error::{CorrigoError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CorrigoError::invalid_argument("API key must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Corrigo operations.
#[derive(Error, Debug)]
pub enum CorrigoError {
    /// I/O errors (process spawning, stdout, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// HTTP transport errors (connection, TLS, timeout).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service answered with a non-success status.
    #[error("API error: status {status}: {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body or status text, for diagnostics.
        message: String,
    },

    /// Invalid input at a call boundary.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Browser/opener process could not be launched.
    #[error("Browser error: {0}")]
    Browser(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with CorrigoError.
pub type Result<T> = std::result::Result<T, CorrigoError>;

impl CorrigoError {
    /// Create a new API error from a status code and message.
    pub fn api<S: Into<String>>(status: u16, message: S) -> Self {
        CorrigoError::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a new invalid-argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        CorrigoError::InvalidArgument(msg.into())
    }

    /// Create a new browser error.
    pub fn browser<S: Into<String>>(msg: S) -> Self {
        CorrigoError::Browser(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CorrigoError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = CorrigoError::api(401, "invalid subscription key");
        assert_eq!(
            err.to_string(),
            "API error: status 401: invalid subscription key"
        );
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = CorrigoError::invalid_argument("site filter must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid argument: site filter must not be empty"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: CorrigoError = io_err.into();
        assert!(matches!(err, CorrigoError::Io(_)));
    }
}
