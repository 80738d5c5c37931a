//! Command to show the decomposition of a path.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions, PathReport};
use clap::Args;
use docpath::PathValue;
use serde::Serialize;
use std::fmt;

/// Show the parts of a path.
#[derive(Args)]
pub struct InspectCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Provider tag for the path
    #[arg(long, value_name = "PROVIDER")]
    pub provider: Option<String>,

    /// Treat the path as a file rather than a directory
    #[arg(long)]
    pub file: bool,
}

#[derive(Debug, Serialize)]
struct InspectReport {
    #[serde(flatten)]
    path: PathReport,
    root: String,
    segments: Vec<String>,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    stem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extension: Option<String>,
    parent: Option<String>,
}

impl InspectReport {
    fn segments_of(path: &impl PathValue) -> Vec<String> {
        path.segments().into_iter().map(str::to_string).collect()
    }
}

/// Placeholder for empty values in text output.
fn dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "path:      {}", self.path.path)?;
        writeln!(f, "provider:  {}", dash(self.path.provider.as_deref().unwrap_or("")))?;
        writeln!(f, "absolute:  {}", self.path.absolute)?;
        writeln!(f, "root:      {}", dash(&self.root))?;
        writeln!(f, "segments:  {}", self.segments.join(", "))?;
        write!(f, "name:      {}", dash(&self.name))?;
        if let Some(stem) = &self.stem {
            write!(f, "\nstem:      {}", dash(stem))?;
        }
        if let Some(extension) = &self.extension {
            write!(f, "\nextension: {}", dash(extension))?;
        }
        write!(f, "\nparent:    {}", dash(self.parent.as_deref().unwrap_or("")))
    }
}

impl InspectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let provider = self.provider.as_deref();

        let report = if self.file {
            let file = ctx.file(&self.path, provider)?;
            InspectReport {
                path: PathReport::file(&file),
                root: file.root().to_string(),
                segments: InspectReport::segments_of(&file),
                name: file.get_file_name().to_string(),
                stem: Some(file.get_filename_without_extension().to_string()),
                extension: Some(file.get_extension().to_string()),
                parent: file.get_directory().map(|dir| dir.full_path().to_string()),
            }
        } else {
            let dir = ctx.directory(&self.path, provider)?;
            InspectReport {
                path: PathReport::directory(&dir),
                root: dir.root().to_string(),
                segments: InspectReport::segments_of(&dir),
                name: dir.get_directory_name().to_string(),
                stem: None,
                extension: None,
                parent: dir.parent().map(|parent| parent.full_path().to_string()),
            }
        };

        ctx.emit(&report)
    }
}
