//! Property-based tests for the combination laws.
//!
//! Enabled with `--features property-tests`; these run many more cases than
//! the inline proptests of the individual modules.

use proptest::prelude::*;

use crate::path::normalize::normalize;
use crate::path::{DirectoryPath, FilePath, PathValue, Provider};

fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,8}"
}

fn relative_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..=4).prop_map(|parts| parts.join("/"))
}

fn root_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/".to_string()),
        "[a-z]".prop_map(|drive| format!("{drive}:/")),
    ]
}

fn absolute_strategy() -> impl Strategy<Value = String> {
    (root_strategy(), relative_strategy()).prop_map(|(root, rel)| format!("{root}{rel}"))
}

fn any_directory() -> impl Strategy<Value = String> {
    prop_oneof![relative_strategy(), absolute_strategy(), root_strategy()]
}

fn provider_strategy() -> impl Strategy<Value = Option<Provider>> {
    prop::option::of("[a-z]{1,6}".prop_map(|tag| Provider::new(tag).unwrap()))
}

fn noisy(raw: &str) -> String {
    raw.replace('/', "\\//")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Normalization does not depend on the separators used
    #[test]
    fn separator_spelling_is_irrelevant(raw in any_directory()) {
        let clean = DirectoryPath::new(&raw).unwrap();
        let messy = DirectoryPath::new(&noisy(&raw)).unwrap();
        prop_assert_eq!(clean, messy);
    }

    /// Combining a relative path appends it and keeps the base provider
    #[test]
    fn combine_relative_appends(
        base in any_directory(),
        base_provider in provider_strategy(),
        rel in relative_strategy(),
        rel_provider in provider_strategy(),
    ) {
        let base = DirectoryPath::new(&base).unwrap().retag(base_provider.clone());
        let rel = DirectoryPath::new(&rel).unwrap().retag(rel_provider);
        let combined = base.combine(&rel);

        let expected = normalize(&format!("{}/{}", base.full_path(), rel.full_path())).unwrap();
        prop_assert_eq!(combined.full_path(), expected.as_str());
        prop_assert_eq!(combined.provider(), base_provider.as_ref());
        prop_assert_eq!(combined.is_absolute(), base.is_absolute());
    }

    /// Combining an absolute path yields that path
    #[test]
    fn combine_absolute_replaces(
        base in any_directory(),
        base_provider in provider_strategy(),
        abs in absolute_strategy(),
        abs_provider in provider_strategy(),
    ) {
        let base = DirectoryPath::new(&base).unwrap().retag(base_provider.clone());
        let abs = DirectoryPath::new(&abs).unwrap().retag(abs_provider.clone());
        let combined = base.combine(&abs);

        prop_assert_eq!(combined.full_path(), abs.full_path());
        prop_assert_eq!(combined.provider(), abs_provider.as_ref().or(base_provider.as_ref()));
    }

    /// get_file_path keeps only the file name of its operand
    #[test]
    fn get_file_path_drops_directories(
        base in any_directory(),
        dirs in relative_strategy(),
        name in "[a-z]{1,8}\\.[a-z]{1,3}",
    ) {
        let base = DirectoryPath::new(&base).unwrap();
        let file = FilePath::new(&format!("{dirs}/{name}")).unwrap();
        let result = base.get_file_path(&file);

        prop_assert_eq!(result.get_file_name(), name.as_str());
        prop_assert_eq!(
            result.get_directory().unwrap().full_path(),
            base.full_path()
        );
    }

    /// combine_file keeps the directories of a relative operand
    #[test]
    fn combine_file_keeps_directories(
        base in any_directory(),
        dirs in relative_strategy(),
        name in "[a-z]{1,8}\\.[a-z]{1,3}",
    ) {
        let base = DirectoryPath::new(&base).unwrap();
        let file = FilePath::new(&format!("{dirs}/{name}")).unwrap();
        let result = base.combine_file(&file);

        let expected = normalize(&format!("{}/{dirs}/{name}", base.full_path())).unwrap();
        prop_assert_eq!(result.full_path(), expected.as_str());
    }

    /// A relative path from a base to its own combination recovers the operand
    #[test]
    fn relative_path_inverts_combine(base in absolute_strategy(), rel in relative_strategy()) {
        let base = DirectoryPath::new(&base).unwrap();
        let rel = DirectoryPath::new(&rel).unwrap();
        let combined = base.combine(&rel);

        prop_assert_eq!(base.get_relative_path(&combined).unwrap(), rel);
    }

    /// Extension accessors partition the file name
    #[test]
    fn stem_and_extension_partition_name(
        stem in "[a-z]{1,8}",
        ext in prop::option::of("[a-z]{1,4}"),
    ) {
        let name = match &ext {
            Some(ext) => format!("{stem}.{ext}"),
            None => stem.clone(),
        };
        let file = FilePath::new(&format!("dir/{name}")).unwrap();

        prop_assert_eq!(file.get_filename_without_extension(), stem.as_str());
        prop_assert_eq!(file.has_extension(), ext.is_some());
        prop_assert_eq!(
            format!("{}{}", file.get_filename_without_extension(), file.get_extension()),
            name
        );
    }
}
