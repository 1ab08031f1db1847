//! Baseclone CLI Library
//!
//! Command-line interface for cloning Airtable shared views:
//!
//! - **Cloning**: copy a shared view (and nested views reachable through
//!   in-record links) into a freshly created base (`baseclone clone`)
//! - **Inspection**: fetch a view and report its inferred structure without
//!   writing anything (`baseclone inspect`)

pub mod commands;
pub mod config;
pub mod error;
pub mod progress;

// Re-export commonly used types
pub use config::Settings;
pub use error::{CliError, Result};

use baseclone_core::client::DEFAULT_API_URL;
use clap::{Parser, Subcommand};

/// Baseclone - clone Airtable shared views into new bases
#[derive(Parser, Debug)]
#[command(name = "baseclone")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// API root for the destination service
    #[arg(long, env = "AIRTABLE_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Bearer token for authenticated calls
    #[arg(long, env = "AIRTABLE_API_KEY", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Host marker that identifies in-record links back to the service
    #[arg(long, env = "BASECLONE_SHARE_HOST", default_value = "airtable.com", global = true)]
    pub share_host: String,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clone a shared view into a freshly created base
    Clone {
        /// Shared view URL (e.g., "https://airtable.com/appXXX/shrYYY")
        url: String,

        /// Name for the new base
        #[arg(short, long)]
        name: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch a shared view and report its structure without writing
    Inspect {
        /// Shared view URL
        url: String,

        /// Print the fetched data as JSON
        #[arg(long)]
        json: bool,
    },
}
