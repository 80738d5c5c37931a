//! Command to combine two directory paths.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions, PathReport};
use clap::Args;

/// Combine a base directory with another directory.
///
/// An absolute OTHER replaces the base; a relative OTHER is appended to it.
#[derive(Args)]
pub struct CombineCommand {
    /// Base directory
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Directory to combine with the base
    #[arg(value_name = "OTHER")]
    pub other: String,

    /// Provider tag for the base directory
    #[arg(long, value_name = "PROVIDER")]
    pub base_provider: Option<String>,

    /// Provider tag for the other directory
    #[arg(long, value_name = "PROVIDER")]
    pub other_provider: Option<String>,
}

impl CombineCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;

        let base = ctx.directory(&self.base, self.base_provider.as_deref())?;
        let other = ctx.operand_directory(&self.other, self.other_provider.as_deref())?;

        ctx.emit(&PathReport::directory(&base.combine(&other)))
    }
}
