//! Error types for the docpath library.
//!
//! This module provides the error hierarchy for every path operation and for
//! configuration loading, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a docpath error.
///
/// # Examples
///
/// ```
/// use docpath::{DirectoryPath, Result};
///
/// fn assets() -> Result<DirectoryPath> {
///     DirectoryPath::new("assets")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the docpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A required path or provider argument was missing.
    #[error("missing required argument '{argument}'")]
    NullArgument {
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// An empty or malformed path was provided.
    #[error("invalid path '{path}': {reason}")]
    InvalidPath {
        /// The offending input, as given.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A provider tag could not be accepted.
    #[error("invalid provider: {reason}")]
    InvalidProvider {
        /// The reason the provider is invalid.
        reason: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build an [`Error::InvalidPath`] for `path`.
    pub(crate) fn invalid_path(path: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if the error reports a missing argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpath::Error;
    ///
    /// let err = Error::NullArgument { argument: "path" };
    /// assert!(err.is_null_argument());
    /// ```
    #[must_use]
    pub fn is_null_argument(&self) -> bool {
        matches!(self, Self::NullArgument { .. })
    }

    /// Check if the error reports an empty or malformed path.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpath::DirectoryPath;
    ///
    /// let err = DirectoryPath::new("").unwrap_err();
    /// assert!(err.is_invalid_path());
    /// ```
    #[must_use]
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }
}
