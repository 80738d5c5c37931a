//! Command to show how two directories relate.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::{Args, ValueEnum};
use docpath::{PathRelationship, PathValue};
use serde::Serialize;
use std::fmt;

/// Show how FIRST relates to SECOND.
#[derive(Args)]
pub struct RelationshipCommand {
    /// First directory
    #[arg(value_name = "FIRST")]
    pub first: String,

    /// Second directory
    #[arg(value_name = "SECOND")]
    pub second: String,

    /// Provider tag for the first directory
    #[arg(long, value_name = "PROVIDER")]
    pub first_provider: Option<String>,

    /// Provider tag for the second directory
    #[arg(long, value_name = "PROVIDER")]
    pub second_provider: Option<String>,

    /// Fail with exit code 1 unless the relationship is this one
    #[arg(long, value_enum, value_name = "RELATIONSHIP")]
    pub expect: Option<ExpectedRelationship>,
}

/// Relationship accepted by `--expect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExpectedRelationship {
    /// FIRST is an ancestor of SECOND
    Ancestor,
    /// FIRST is a descendant of SECOND
    Descendant,
    /// FIRST and SECOND are the same path
    Same,
    /// Neither contains the other
    Unrelated,
}

impl From<ExpectedRelationship> for PathRelationship {
    fn from(expected: ExpectedRelationship) -> Self {
        match expected {
            ExpectedRelationship::Ancestor => Self::Ancestor,
            ExpectedRelationship::Descendant => Self::Descendant,
            ExpectedRelationship::Same => Self::Same,
            ExpectedRelationship::Unrelated => Self::Unrelated,
        }
    }
}

#[derive(Debug, Serialize)]
struct RelationshipReport {
    first: String,
    second: String,
    relationship: String,
    description: String,
}

impl fmt::Display for RelationshipReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.relationship)
    }
}

impl RelationshipCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;

        let first = ctx.directory(&self.first, self.first_provider.as_deref())?;
        let second = ctx.directory(&self.second, self.second_provider.as_deref())?;
        let relationship = PathRelationship::between(&first, &second);
        let description = relationship.description(&first, &second);

        if let Some(expected) = self.expect {
            let expected = PathRelationship::from(expected);
            if relationship != expected {
                return Err(CliError::SemanticFailure(format!(
                    "expected {expected}, found {relationship}: {description}"
                )));
            }
        }

        ctx.emit(&RelationshipReport {
            first: first.full_path().to_string(),
            second: second.full_path().to_string(),
            relationship: relationship.to_string(),
            description,
        })
    }
}
