//! srsift CLI library.
//!
//! Argument parsing, settings resolution, logging setup and output formatting
//! for the `srsift` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::Cli;
pub use config::Settings;
pub use error::{CliError, Result};
pub use output::Formatter;
