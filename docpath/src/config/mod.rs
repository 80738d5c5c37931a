//! Configuration system for docpath.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `docpath.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`DOCPATH_*`)
//! 3. An explicit config file (via `ConfigBuilder::with_config_file`)
//! 4. Project config (`docpath.yaml`, nearest ancestor of the working dir)
//! 5. User config (`~/.docpath/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use docpath::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/site"))
//!     .build()
//!     .unwrap();
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use docpath::config::{Config, ConfigBuilder, RootKind};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         default_provider: Some("input".to_string()),
//!         roots: Some(vec![RootKind::Separator]),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert!(!config.path_syntax().is_absolute("c:/data"));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, RootKind};
pub use validator::ConfigValidator;
