//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CombineCommand, CombineFileCommand, CompletionsCommand, InspectCommand, NormalizeCommand,
    RebaseCommand, RelationshipCommand, RelativeCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use docpath::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for normalizing and combining provider-aware paths.
#[derive(Parser)]
#[command(name = "docpath")]
#[command(version, about = "Normalize and combine provider-aware paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file in addition to discovered ones
    #[arg(long, value_name = "PATH", global = true, env = "DOCPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, value_name = "FORMAT", global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Normalize a path
    Normalize(NormalizeCommand),

    /// Combine a base directory with another directory
    Combine(CombineCommand),

    /// Combine a base directory with a file, keeping the file's directories
    CombineFile(CombineFileCommand),

    /// Place a file's name under a base directory
    Rebase(RebaseCommand),

    /// Show the parts of a path
    Inspect(InspectCommand),

    /// Compute the relative path between two paths
    Relative(RelativeCommand),

    /// Show how two directories relate
    Relationship(RelationshipCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
