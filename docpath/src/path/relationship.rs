//! Path relationship checking.
//!
//! This module determines how two path values relate in the namespace
//! hierarchy. Comparison is segment-wise and provider-aware: paths under
//! different providers live in different namespaces and are never related.

use std::fmt;

use crate::path::root::SEPARATOR;
use crate::path::types::PathValue;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use docpath::{DirectoryPath, FilePath, PathRelationship};
///
/// let site = DirectoryPath::new("/site").unwrap();
/// let post = FilePath::new("/site/posts/first.md").unwrap();
///
/// assert_eq!(PathRelationship::between(&site, &post), PathRelationship::Ancestor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same location under the same provider.
    Same,

    /// Neither path contains the other, or they belong to different
    /// providers or roots.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Segments are compared case-sensitively; drive letters in roots are
    /// compared case-insensitively. `.` and `..` are not resolved; collapse
    /// the paths first if they may contain them.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpath::{DirectoryPath, PathRelationship};
    ///
    /// let a = DirectoryPath::new("/a").unwrap();
    /// let ab = DirectoryPath::new("/a/b").unwrap();
    /// let b = DirectoryPath::new("/b").unwrap();
    /// let themed = DirectoryPath::with_provider("theme", "/a/b").unwrap();
    ///
    /// assert_eq!(PathRelationship::between(&a, &ab), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between(&ab, &a), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(&a, &a), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between(&a, &b), PathRelationship::Unrelated);
    /// assert_eq!(PathRelationship::between(&a, &themed), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(first: &impl PathValue, second: &impl PathValue) -> Self {
        if first.provider() != second.provider()
            || first.is_absolute() != second.is_absolute()
            || !same_root(first.root(), second.root())
        {
            return Self::Unrelated;
        }

        let first = first.segments();
        let second = second.segments();

        if first == second {
            Self::Same
        } else if second.starts_with(&first) {
            Self::Ancestor
        } else if first.starts_with(&second) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Check if the relationship is hierarchical (not unrelated).
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if `path` lies within `directory` (descendant or same).
    #[must_use]
    pub fn is_within(path: &impl PathValue, directory: &impl PathValue) -> bool {
        matches!(Self::between(path, directory), Self::Descendant | Self::Same)
    }

    /// Check if `path` contains `other` (ancestor or same).
    #[must_use]
    pub fn contains(path: &impl PathValue, other: &impl PathValue) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self, first: &impl PathValue, second: &impl PathValue) -> String {
        let (first, second) = (first.full_path(), second.full_path());
        match self {
            Self::Ancestor => format!("{first} is an ancestor of {second}"),
            Self::Descendant => format!("{first} is a descendant of {second}"),
            Self::Same => format!("{first} and {second} are the same path"),
            Self::Unrelated => format!("{first} and {second} are unrelated paths"),
        }
    }
}

impl fmt::Display for PathRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ancestor => write!(f, "ancestor"),
            Self::Descendant => write!(f, "descendant"),
            Self::Same => write!(f, "same"),
            Self::Unrelated => write!(f, "unrelated"),
        }
    }
}

/// Whether two root prefixes denote the same root.
///
/// A trailing separator is ignored and ASCII case is folded, so `c:`, `C:/`
/// and `c:/` all match.
pub(crate) fn same_root(first: &str, second: &str) -> bool {
    first
        .trim_end_matches(SEPARATOR)
        .eq_ignore_ascii_case(second.trim_end_matches(SEPARATOR))
}
