#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # docpath
//!
//! Provider-aware, normalized directory and file paths for content pipelines.
//!
//! This library models paths that address content across one or more backing
//! sources ("providers"), such as an input folder and a theme folder. Paths
//! are normalized on construction and combine under well-defined rules.
//!
//! ## Core Types
//!
//! - [`DirectoryPath`] and [`FilePath`]: Immutable path values
//! - [`Provider`]: Tag naming the backing source of a path
//! - [`PathSyntax`]: Pluggable detection of absolute roots
//! - [`PathRelationship`]: Hierarchical comparison of paths
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use docpath::{DirectoryPath, FilePath, PathValue};
//!
//! let assets = DirectoryPath::with_provider("theme", "assets/").unwrap();
//! let file = FilePath::new("shaders/simple.frag").unwrap();
//!
//! let combined = assets.combine_file(&file);
//! assert_eq!(combined.full_path(), "assets/shaders/simple.frag");
//! assert_eq!(combined.provider().unwrap().as_str(), "theme");
//!
//! let rebased = assets.get_file_path(&file);
//! assert_eq!(rebased.full_path(), "assets/simple.frag");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat, RootKind};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    DirectoryPath, FilePath, PathRelationship, PathSyntax, PathValue, Provider, RootSyntax,
};
