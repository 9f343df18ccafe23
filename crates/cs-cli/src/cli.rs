//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// contractsync - keep schema, types, endpoints and code in agreement
#[derive(Parser, Debug)]
#[command(name = "csync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cross-check contracts against each other and against source code
    Validate(ValidateArgs),

    /// Print what was extracted from the contracts and sources
    Inspect(InspectArgs),
}

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Only validate this contracts directory (project root is its parent)
    #[arg(long)]
    pub contracts_only: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: ValidateOutput,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Override the number of file-reading workers
    #[arg(long)]
    pub threads: Option<usize>,

    /// Passes to run (comma-separated, default: all enabled)
    #[arg(long, value_delimiter = ',')]
    pub pass: Option<Vec<String>>,
}

/// Validate output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidateOutput {
    /// Grouped human-readable report
    Text,
    /// Single JSON document
    Json,
    /// One JSON object per issue
    Jsonl,
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: InspectOutput,
}

/// Inspect output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectOutput {
    /// Tables per artifact
    Table,
    /// The full extracted model as JSON
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
