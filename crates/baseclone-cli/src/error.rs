//! Error types for the baseclone CLI
//!
//! User-facing errors with actionable messages; core errors pass through
//! with their own context attached.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Core clone operation failed
    #[error(transparent)]
    Clone(#[from] baseclone_core::CloneError),

    /// The clone ran but did not complete; partial state was reported
    #[error("Clone aborted: {0}")]
    CloneAborted(String),

    /// JSON output could not be produced
    #[error("Failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a clone-aborted error
    pub fn clone_aborted(msg: impl Into<String>) -> Self {
        Self::CloneAborted(msg.into())
    }
}
