//! Command to place a file's name under a directory.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions, PathReport};
use clap::Args;

/// Place a file's name under a base directory, dropping the file's own
/// directories. The result always takes the base directory's provider.
#[derive(Args)]
pub struct RebaseCommand {
    /// Base directory
    #[arg(value_name = "BASE")]
    pub base: String,

    /// File whose name is placed under the base
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Provider tag for the base directory
    #[arg(long, value_name = "PROVIDER")]
    pub base_provider: Option<String>,

    /// Provider tag for the file
    #[arg(long, value_name = "PROVIDER")]
    pub file_provider: Option<String>,
}

impl RebaseCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;

        let base = ctx.directory(&self.base, self.base_provider.as_deref())?;
        let file = ctx.operand_file(&self.file, self.file_provider.as_deref())?;

        ctx.emit(&PathReport::file(&base.get_file_path(&file)))
    }
}
