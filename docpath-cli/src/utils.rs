//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, operand parsing, and output formatting.

use crate::error::CliError;
use docpath::{
    Config, ConfigBuilder, DirectoryPath, Error as LibError, FilePath, OutputFormat, PathSyntax,
    PathValue, Provider,
};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // verbose is consumed by the logger before dispatch
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Output format requested on the command line.
    pub format: Option<OutputFormat>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    if global.format.is_some() {
        builder = builder.with_config(Config {
            output_format: global.format,
            ..Default::default()
        });
    }

    builder.build().map_err(|e| match e {
        LibError::Io(io) => CliError::Io(io),
        other => CliError::Config(other.to_string()),
    })
}

/// Everything a command needs to turn operands into paths and print results.
#[derive(Debug, Clone)]
pub struct Context {
    syntax: PathSyntax,
    default_provider: Option<Provider>,
    format: OutputFormat,
}

impl Context {
    /// Build the context from the merged configuration.
    pub fn load(global: &GlobalOptions) -> Result<Self, CliError> {
        let config = load_configuration(global)?;
        Self::from_config(&config)
    }

    /// Build the context from an already loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, CliError> {
        let default_provider = config
            .default_provider()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(Self {
            syntax: config.path_syntax(),
            default_provider,
            format: config.output_format.unwrap_or_default(),
        })
    }

    /// Resolve the provider for a primary operand: the explicit flag if
    /// given, otherwise the configured default.
    fn provider(&self, explicit: Option<&str>) -> Result<Option<Provider>, CliError> {
        Ok(explicit_provider(explicit)?.or_else(|| self.default_provider.clone()))
    }

    /// Parse a primary directory operand (a base, or a standalone path).
    pub fn directory(&self, raw: &str, provider: Option<&str>) -> Result<DirectoryPath, CliError> {
        let provider = self.provider(provider)?;
        Ok(DirectoryPath::from_parts(provider, raw, &self.syntax)?)
    }

    /// Parse a primary file operand.
    pub fn file(&self, raw: &str, provider: Option<&str>) -> Result<FilePath, CliError> {
        let provider = self.provider(provider)?;
        Ok(FilePath::from_parts(provider, raw, &self.syntax)?)
    }

    /// Parse a directory combined onto a base. It only carries a provider
    /// when one is given explicitly, so an untagged absolute operand falls
    /// back to the base's provider.
    pub fn operand_directory(
        &self,
        raw: &str,
        provider: Option<&str>,
    ) -> Result<DirectoryPath, CliError> {
        let provider = explicit_provider(provider)?;
        Ok(DirectoryPath::from_parts(provider, raw, &self.syntax)?)
    }

    /// Parse a file combined onto a base; see [`Context::operand_directory`].
    pub fn operand_file(&self, raw: &str, provider: Option<&str>) -> Result<FilePath, CliError> {
        let provider = explicit_provider(provider)?;
        Ok(FilePath::from_parts(provider, raw, &self.syntax)?)
    }

    /// Print a report in the configured format.
    pub fn emit<T: Serialize + fmt::Display>(&self, report: &T) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Text => println!("{report}"),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        }
        Ok(())
    }
}

fn explicit_provider(tag: Option<&str>) -> Result<Option<Provider>, CliError> {
    Ok(tag.map(Provider::new).transpose()?)
}

/// Whether a reported path names a directory or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    /// A directory path.
    Directory,
    /// A file path.
    File,
}

/// The common shape in which every command reports a path.
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    /// Normalized path string.
    pub path: String,
    /// Provider tag, if any.
    pub provider: Option<String>,
    /// Directory or file.
    pub kind: PathKind,
    /// Whether the path is absolute.
    pub absolute: bool,
}

impl PathReport {
    fn new(path: &impl PathValue, kind: PathKind) -> Self {
        Self {
            path: path.full_path().to_string(),
            provider: path.provider().map(ToString::to_string),
            kind,
            absolute: path.is_absolute(),
        }
    }

    /// Report a directory path.
    pub fn directory(path: &DirectoryPath) -> Self {
        Self::new(path, PathKind::Directory)
    }

    /// Report a file path.
    pub fn file(path: &FilePath) -> Self {
        Self::new(path, PathKind::File)
    }
}

impl fmt::Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.provider {
            Some(provider) => write!(f, "{} [{provider}]", self.path),
            None => write!(f, "{}", self.path),
        }
    }
}
