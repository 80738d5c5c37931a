//! Command to print the normalized form of a path.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions, PathReport};
use clap::Args;

/// Normalize a path.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Provider tag for the path
    #[arg(long, value_name = "PROVIDER")]
    pub provider: Option<String>,

    /// Treat the path as a file rather than a directory
    #[arg(long)]
    pub file: bool,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let provider = self.provider.as_deref();

        let report = if self.file {
            PathReport::file(&ctx.file(&self.path, provider)?)
        } else {
            PathReport::directory(&ctx.directory(&self.path, provider)?)
        };

        ctx.emit(&report)
    }
}
