//! Application error types

use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// No access token is available; workspace operations require one.
    #[error("not logged in")]
    NotAuthenticated,

    /// The backend rejected a request.
    #[error("{message}")]
    Backend {
        /// HTTP status code
        status: u16,
        /// Server-provided message, or a generic status line
        message: String,
    },

    /// An HTTP transport error occurred before a response arrived.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A storage operation failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// An input file could not be parsed.
    #[error("Failed to parse file: {0}")]
    Parse(String),

    /// The input file matched no recognized format.
    #[error("Unsupported file format")]
    UnsupportedFormat,

    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
