//! Error types for the clone pipeline
//!
//! Errors carry enough context for a caller to tell which remote interaction
//! failed. Fetch-stage failures are converted into sentinel outcomes at the
//! point of occurrence (see [`crate::fetch::FetchOutcome`]); materialization
//! and write failures propagate through these types.

use thiserror::Error;

/// Result type alias for clone operations
pub type Result<T> = std::result::Result<T, CloneError>;

/// Error type for clone operations
#[derive(Error, Debug)]
pub enum CloneError {
    /// Share address could not be parsed into base/view identifiers
    #[error("Malformed share address: {0}. Expected a URL like https://airtable.com/appXXX/shrYYY.")]
    MalformedAddress(String),

    /// HTTP transport failed (connection, timeout, malformed body)
    #[error("Network request failed: {0}. Check your connection and the service URL.")]
    Transport(#[from] reqwest::Error),

    /// Remote service answered with a non-success status
    #[error("Remote service returned {status} for {url}")]
    RemoteStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Client configuration is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CloneError {
    /// Create a malformed address error
    pub fn malformed_address(msg: impl Into<String>) -> Self {
        Self::MalformedAddress(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
