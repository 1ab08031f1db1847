//! Settings for the baseclone CLI
//!
//! Translates command-line flags and environment into the core client
//! configuration. All ambient-state reads live here; core components only
//! ever see an explicit [`ClientConfig`].

use crate::Cli;
use baseclone_core::client::DEFAULT_TIMEOUT_SECS;
use baseclone_core::ClientConfig;
use std::time::Duration;

/// Resolved CLI settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// API root for the destination service
    pub api_url: String,

    /// Bearer token, when provided
    pub token: Option<String>,

    /// Host marker for in-record links
    pub share_host: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Settings {
    /// Build settings from parsed CLI arguments
    ///
    /// The timeout can be overridden via `BASECLONE_TIMEOUT_SECS`.
    pub fn from_cli(cli: &Cli) -> Self {
        let timeout_secs = std::env::var("BASECLONE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_url: cli.api_url.clone(),
            token: cli.token.clone(),
            share_host: cli.share_host.clone(),
            timeout_secs,
        }
    }

    /// Client configuration for the core pipeline
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_url: self.api_url.clone(),
            token: self.token.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}
