//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// z/OSMF command-line client
#[derive(Parser, Debug)]
#[command(name = "zosmf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON). Without it, ZOSMF_* variables and then
    /// ~/.config/zosmf/config.json or ~/.zosmf_config.json are used
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dataset operations
    #[command(subcommand)]
    Datasets(DatasetCommand),

    /// Job operations
    #[command(subcommand)]
    Jobs(JobCommand),

    /// Configuration inspection
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Dataset subcommands
#[derive(Subcommand, Debug)]
pub enum DatasetCommand {
    /// List datasets
    List,

    /// Show a dataset
    Get {
        /// Dataset name
        name: String,
    },

    /// Create a dataset
    Create {
        /// Dataset name
        name: String,

        /// Dataset type (e.g., PDS, PS)
        #[arg(long = "type", short = 't')]
        dataset_type: String,
    },

    /// Delete a dataset
    Delete {
        /// Dataset name
        name: String,
    },
}

/// Job subcommands
#[derive(Subcommand, Debug)]
pub enum JobCommand {
    /// List jobs
    List,
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the resolved profile (password redacted)
    Show,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
}
