//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use docpath::config::{Config, ConfigMerger};
///
/// let low = Config { default_provider: Some("low".to_string()), ..Default::default() };
/// let high = Config { default_provider: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.default_provider, Some("high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Root list: replaced as a whole, never concatenated
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.default_provider.is_some() {
            target.default_provider.clone_from(&source.default_provider);
        }

        if source.roots.is_some() {
            target.roots.clone_from(&source.roots);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{OutputFormat, RootKind};
    use std::path::PathBuf;

    fn make_source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("test-{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_simple_fields() {
        let mut target = Config::default();
        let source = Config {
            default_provider: Some("theme".to_string()),
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.default_provider, Some("theme".to_string()));
        assert_eq!(target.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_merge_none_keeps_target() {
        let mut target = Config::defaults();
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target, Config::defaults());
    }

    #[test]
    fn test_merge_roots_replaced() {
        let mut target = Config::defaults();
        let source = Config {
            roots: Some(vec![RootKind::Drive]),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.roots, Some(vec![RootKind::Drive]));
    }

    #[test]
    fn test_merge_sources_in_order() {
        let sources = vec![
            make_source(
                1,
                Config {
                    default_provider: Some("user".to_string()),
                    output_format: Some(OutputFormat::Json),
                    ..Default::default()
                },
            ),
            make_source(
                2,
                Config {
                    default_provider: Some("project".to_string()),
                    ..Default::default()
                },
            ),
        ];

        let merged = ConfigMerger::merge(sources);
        assert_eq!(merged.default_provider, Some("project".to_string()));
        assert_eq!(merged.output_format, Some(OutputFormat::Json));
    }
}
