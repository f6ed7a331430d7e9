//! CLI module
//!
//! Command-line interface for a z/OSMF server.
//!
//! # Commands
//!
//! - `datasets list|get|create|delete` - Manage datasets
//! - `jobs list` - List jobs
//! - `config show` - Print the resolved connection profile

mod commands;
mod runner;

pub use commands::{Cli, Commands, ConfigCommand, DatasetCommand, JobCommand, OutputFormat};
pub use runner::Runner;
