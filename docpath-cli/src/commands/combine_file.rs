//! Command to combine a directory with a file path.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions, PathReport};
use clap::Args;

/// Combine a base directory with a file, keeping the file's own directories.
#[derive(Args)]
pub struct CombineFileCommand {
    /// Base directory
    #[arg(value_name = "BASE")]
    pub base: String,

    /// File to combine with the base
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Provider tag for the base directory
    #[arg(long, value_name = "PROVIDER")]
    pub base_provider: Option<String>,

    /// Provider tag for the file
    #[arg(long, value_name = "PROVIDER")]
    pub file_provider: Option<String>,
}

impl CombineFileCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;

        let base = ctx.directory(&self.base, self.base_provider.as_deref())?;
        let file = ctx.operand_file(&self.file, self.file_provider.as_deref())?;

        ctx.emit(&PathReport::file(&base.combine_file(&file)))
    }
}
