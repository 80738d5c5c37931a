//! Configuration schema definitions.
//!
//! This module defines the configuration structure for docpath: the provider
//! applied to untagged operands, the enabled root syntaxes, and the output
//! format used by the command-line tool.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::{DriveRoot, PathSyntax, Provider, SeparatorRoot};

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can
/// be layered; see [`ConfigMerger`](crate::config::ConfigMerger).
///
/// # Examples
///
/// ```
/// use docpath::config::{Config, OutputFormat};
///
/// let config = Config {
///     default_provider: Some("input".to_string()),
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert_eq!(config.default_provider.as_deref(), Some("input"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Provider applied to operands that do not name one.
    pub default_provider: Option<String>,

    /// Enabled absolute root syntaxes, in match order.
    pub roots: Option<Vec<RootKind>>,

    /// Output format for command results.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The built-in defaults: no default provider, separator and drive
    /// roots, text output.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            default_provider: None,
            roots: Some(vec![RootKind::Separator, RootKind::Drive]),
            output_format: Some(OutputFormat::Text),
        }
    }

    /// Build the root syntax described by `roots`.
    ///
    /// An unset root list yields the standard syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpath::config::{Config, RootKind};
    ///
    /// let config = Config {
    ///     roots: Some(vec![RootKind::Separator]),
    ///     ..Default::default()
    /// };
    /// let syntax = config.path_syntax();
    /// assert!(syntax.is_absolute("/assets"));
    /// assert!(!syntax.is_absolute("c:/assets"));
    /// ```
    #[must_use]
    pub fn path_syntax(&self) -> PathSyntax {
        let Some(roots) = &self.roots else {
            return PathSyntax::standard();
        };

        roots
            .iter()
            .fold(PathSyntax::empty(), |syntax, kind| match kind {
                RootKind::Separator => syntax.with_root(SeparatorRoot),
                RootKind::Drive => syntax.with_root(DriveRoot),
            })
    }

    /// The configured default provider, if any.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProvider`] if the configured tag is blank.
    pub fn default_provider(&self) -> Result<Option<Provider>> {
        Provider::optional(self.default_provider.as_deref())
    }
}

/// A family of absolute roots that can be enabled in configuration.
///
/// # Examples
///
/// ```
/// use docpath::config::RootKind;
///
/// let kind: RootKind = "drive".parse().unwrap();
/// assert_eq!(kind, RootKind::Drive);
/// assert_eq!(kind.to_string(), "drive");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RootKind {
    /// Paths beginning with `/`.
    Separator,
    /// Drive roots such as `c:/`.
    Drive,
}

impl fmt::Display for RootKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Separator => write!(f, "separator"),
            Self::Drive => write!(f, "drive"),
        }
    }
}

impl FromStr for RootKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "separator" => Ok(Self::Separator),
            "drive" => Ok(Self::Drive),
            other => Err(Error::Validation {
                field: "roots".into(),
                message: format!("unknown root kind '{other}' (expected separator or drive)"),
            }),
        }
    }
}

/// Output format for command results.
///
/// # Examples
///
/// ```
/// use docpath::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON output format.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("unknown output format '{other}' (expected text or json)"),
            }),
        }
    }
}
