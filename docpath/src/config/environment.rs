//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `DOCPATH_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::{Config, OutputFormat, RootKind};
use crate::error::{Error, Result};

/// Provider applied to untagged operands.
pub const DEFAULT_PROVIDER_ENV: &str = "DOCPATH_DEFAULT_PROVIDER";

/// Comma-separated list of enabled root kinds.
pub const ROOTS_ENV: &str = "DOCPATH_ROOTS";

/// Output format (`text` or `json`).
pub const OUTPUT_FORMAT_ENV: &str = "DOCPATH_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use docpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a variable holds an unrecognised root
    /// kind or output format.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(provider) = env::var(DEFAULT_PROVIDER_ENV) {
            log::debug!("{DEFAULT_PROVIDER_ENV} overrides default provider");
            config.default_provider = Some(provider);
        }

        if let Ok(roots) = env::var(ROOTS_ENV) {
            config.roots = Some(Self::parse_roots(&roots)?);
        }

        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(format.parse::<OutputFormat>().map_err(|_| {
                Error::Validation {
                    field: OUTPUT_FORMAT_ENV.into(),
                    message: format!("Invalid output format: '{format}' (expected text or json)"),
                }
            })?);
        }

        Ok(())
    }

    /// Parse root kinds from a comma-separated string.
    ///
    /// Blank entries are skipped; an all-blank list yields an empty vector,
    /// which validation later rejects.
    fn parse_roots(s: &str) -> Result<Vec<RootKind>> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<RootKind>().map_err(|_| Error::Validation {
                    field: ROOTS_ENV.into(),
                    message: format!("Invalid root kind: '{part}'"),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvGuard {
        key: &'static str,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self { key, old_value }
        }

        fn remove(key: &'static str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self { key, old_value }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }

    #[test]
    fn test_parse_roots_single() {
        let roots = EnvironmentConfig::parse_roots("drive").unwrap();
        assert_eq!(roots, vec![RootKind::Drive]);
    }

    #[test]
    fn test_parse_roots_multiple_with_whitespace() {
        let roots = EnvironmentConfig::parse_roots(" separator , drive ").unwrap();
        assert_eq!(roots, vec![RootKind::Separator, RootKind::Drive]);
    }

    #[test]
    fn test_parse_roots_empty() {
        assert!(EnvironmentConfig::parse_roots("").unwrap().is_empty());
        assert!(EnvironmentConfig::parse_roots(" , ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_roots_invalid() {
        let err = EnvironmentConfig::parse_roots("separator,unc").unwrap_err();
        assert!(err.to_string().contains(ROOTS_ENV));
    }

    #[test]
    #[serial]
    fn test_apply_overrides() {
        let _provider = EnvGuard::set(DEFAULT_PROVIDER_ENV, "theme");
        let _roots = EnvGuard::set(ROOTS_ENV, "separator");
        let _format = EnvGuard::set(OUTPUT_FORMAT_ENV, "json");

        let mut config = Config::defaults();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();

        assert_eq!(config.default_provider, Some("theme".to_string()));
        assert_eq!(config.roots, Some(vec![RootKind::Separator]));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
    }

    #[test]
    #[serial]
    fn test_apply_overrides_without_variables() {
        let _provider = EnvGuard::remove(DEFAULT_PROVIDER_ENV);
        let _roots = EnvGuard::remove(ROOTS_ENV);
        let _format = EnvGuard::remove(OUTPUT_FORMAT_ENV);

        let mut config = Config::defaults();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, Config::defaults());
    }

    #[test]
    #[serial]
    fn test_invalid_output_format() {
        let _format = EnvGuard::set(OUTPUT_FORMAT_ENV, "table");

        let mut config = Config::default();
        let err = EnvironmentConfig::apply_overrides(&mut config).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }
}
