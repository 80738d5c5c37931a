//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Print the normalized form of a path
//! - `combine`: Combine two directories
//! - `combine_file`: Combine a directory with a file, keeping its directories
//! - `rebase`: Place a file's name under a directory
//! - `inspect`: Show the parts of a path
//! - `relative`: Compute a relative path
//! - `relationship`: Show how two directories relate
//! - `validate`: Validate configuration file
//! - `completions`: Generate shell completion scripts

pub mod combine;
pub mod combine_file;
pub mod completions;
pub mod inspect;
pub mod normalize;
pub mod rebase;
pub mod relationship;
pub mod relative;
pub mod validate;

pub use combine::CombineCommand;
pub use combine_file::CombineFileCommand;
pub use completions::CompletionsCommand;
pub use inspect::InspectCommand;
pub use normalize::NormalizeCommand;
pub use rebase::RebaseCommand;
pub use relationship::RelationshipCommand;
pub use relative::RelativeCommand;
pub use validate::ValidateCommand;
