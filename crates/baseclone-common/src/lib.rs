//! Baseclone Common Library
//!
//! Shared infrastructure for the baseclone workspace. Currently this is the
//! logging layer used by both the core library and the CLI.
//!
//! # Example
//!
//! ```no_run
//! use baseclone_common::logging::{init_logging, LogConfig, LogLevel};
//!
//! let config = LogConfig::builder().level(LogLevel::Debug).build();
//! init_logging(&config).unwrap();
//! ```

pub mod logging;
