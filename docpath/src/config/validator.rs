//! Configuration validation.
//!
//! This module checks that configuration values are usable before any path
//! is built from them.

use std::collections::HashSet;

use crate::config::schema::{Config, RootKind};
use crate::error::{Error, Result};

/// Validates a merged or single-file configuration.
///
/// # Examples
///
/// ```
/// use docpath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::defaults()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref provider) = config.default_provider {
            Self::validate_provider("default_provider", provider)?;
        }

        if let Some(ref roots) = config.roots {
            Self::validate_roots(roots)?;
        }

        Ok(())
    }

    /// Provider tags must be non-blank and free of null bytes.
    fn validate_provider(field: &str, value: &str) -> Result<()> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if trimmed.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        Ok(())
    }

    /// At least one root kind, each listed once.
    fn validate_roots(roots: &[RootKind]) -> Result<()> {
        if roots.is_empty() {
            return Err(Error::Validation {
                field: "roots".into(),
                message: "At least one root kind must be enabled".into(),
            });
        }

        let mut seen = HashSet::new();
        for (i, root) in roots.iter().enumerate() {
            if !seen.insert(root) {
                return Err(Error::Validation {
                    field: format!("roots[{i}]"),
                    message: format!("Duplicate root kind: {root}"),
                });
            }
        }

        Ok(())
    }
}
