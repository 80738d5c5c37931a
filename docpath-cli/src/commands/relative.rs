//! Command to compute the relative path from one directory to another path.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions, PathReport};
use clap::Args;

/// Compute the relative path leading from FROM to TO.
///
/// Both paths must share a provider and a root.
#[derive(Args)]
pub struct RelativeCommand {
    /// Directory to start from
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Target path
    #[arg(value_name = "TO")]
    pub to: String,

    /// Treat TO as a file rather than a directory
    #[arg(long)]
    pub file: bool,

    /// Provider tag for both paths
    #[arg(long, value_name = "PROVIDER")]
    pub provider: Option<String>,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let provider = self.provider.as_deref();

        let from = ctx.directory(&self.from, provider)?;
        let report = if self.file {
            let to = ctx.file(&self.to, provider)?;
            PathReport::file(&from.get_relative_file_path(&to)?)
        } else {
            let to = ctx.directory(&self.to, provider)?;
            PathReport::directory(&from.get_relative_path(&to)?)
        };

        ctx.emit(&report)
    }
}
