//! Provider-aware path values.
//!
//! This module provides the directory and file path types used to address
//! content across one or more backing sources, together with the
//! normalization and combination rules that govern them.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Every path is normalized on construction:
//! - `\` and `/` are unified to `/`
//! - Runs of separators collapse into one
//! - A trailing separator is dropped unless the path is a bare root
//!
//! ## Absolute paths
//!
//! A path is absolute when a [`RootSyntax`] of the active [`PathSyntax`]
//! recognises its prefix. The standard syntax accepts `/...` and drive roots
//! such as `c:/...`. Further syntaxes plug in without changing how paths
//! combine.
//!
//! ## Providers
//!
//! A [`Provider`] tags the backing source a path belongs to. Two paths with
//! the same text but different providers are different paths.
//!
//! # Combination rules
//!
//! | Operation | Operand | Result path | Result provider |
//! |---|---|---|---|
//! | [`DirectoryPath::combine`] | absolute | operand | operand's, else base's |
//! | [`DirectoryPath::combine`] | relative | base + operand | base's |
//! | [`DirectoryPath::combine_file`] | absolute | operand | operand's, else base's |
//! | [`DirectoryPath::combine_file`] | relative | base + operand | base's |
//! | [`DirectoryPath::get_file_path`] | any | base + operand's file name | base's |
//!
//! # Examples
//!
//! ```
//! use docpath::path::{DirectoryPath, FilePath, PathValue};
//!
//! let root = DirectoryPath::new("c:/").unwrap();
//! let nested = root.combine(&DirectoryPath::new("c:/test/simple").unwrap());
//! assert_eq!(nested.full_path(), "c:/test/simple");
//!
//! let shaders = DirectoryPath::new("assets/shaders").unwrap();
//! let file = FilePath::new("test/simple.frag").unwrap();
//! assert_eq!(shaders.get_file_path(&file).full_path(), "assets/shaders/simple.frag");
//! ```

mod directory;
mod file;
pub mod normalize;
mod provider;
pub mod relationship;
pub mod root;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use directory::DirectoryPath;
pub use file::FilePath;
pub use provider::Provider;
pub use relationship::PathRelationship;
pub use root::{is_absolute, DriveRoot, PathSyntax, RootMatch, RootSyntax, SeparatorRoot, SEPARATOR};
pub use types::PathValue;
