//! Path normalization functions.
//!
//! Normalization converts a raw path string to canonical form by:
//! - Unifying `\` and `/` to the canonical separator
//! - Collapsing runs of separators into one
//! - Stripping a trailing separator unless the path is a bare root
//!
//! Normalization is purely lexical; `.` and `..` segments are preserved
//! (see [`resolve_dots`] for lexical resolution).

use crate::error::{Error, Result};
use crate::path::root::{standard_syntax, PathSyntax, SEPARATOR};

/// A normalized path together with the length of its root prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Normalized {
    pub(crate) full_path: String,
    pub(crate) root_len: usize,
}

/// Replace every platform separator with the canonical one.
///
/// # Examples
///
/// ```
/// use docpath::path::normalize::unify_separators;
///
/// assert_eq!(unify_separators(r"c:\assets\shaders"), "c:/assets/shaders");
/// ```
#[must_use]
pub fn unify_separators(raw: &str) -> String {
    raw.replace('\\', "/")
}

/// Collapse runs of canonical separators into one.
///
/// # Examples
///
/// ```
/// use docpath::path::normalize::collapse_separators;
///
/// assert_eq!(collapse_separators("//assets///shaders/"), "/assets/shaders/");
/// ```
#[must_use]
pub fn collapse_separators(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    let mut previous_was_separator = false;

    for c in path.chars() {
        let is_separator = c == SEPARATOR;
        if !(is_separator && previous_was_separator) {
            result.push(c);
        }
        previous_was_separator = is_separator;
    }

    result
}

pub(crate) fn normalize_parts(raw: &str, syntax: &PathSyntax) -> Result<Normalized> {
    if raw.is_empty() {
        return Err(Error::invalid_path(raw, "path must not be empty"));
    }

    let mut full_path = collapse_separators(&unify_separators(raw));
    let root_len = syntax
        .root_len(&full_path)
        .map_err(|reason| Error::invalid_path(raw, reason))?
        .unwrap_or(0);

    // A lone separator is kept even when no syntax treats it as a root.
    if full_path.len() > root_len.max(1) && full_path.ends_with(SEPARATOR) {
        full_path.pop();
    }

    log::trace!("normalized '{raw}' to '{full_path}' (root length {root_len})");

    Ok(Normalized {
        full_path,
        root_len,
    })
}

/// Normalize a raw path string using the given root syntax.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the input is empty or its root prefix
/// is malformed.
///
/// # Examples
///
/// ```
/// use docpath::path::{normalize::normalize_with, PathSyntax};
///
/// let syntax = PathSyntax::standard();
/// assert_eq!(normalize_with("c:/", &syntax).unwrap(), "c:/");
/// assert_eq!(normalize_with("assets/", &syntax).unwrap(), "assets");
/// ```
pub fn normalize_with(raw: &str, syntax: &PathSyntax) -> Result<String> {
    normalize_parts(raw, syntax).map(|normalized| normalized.full_path)
}

/// Normalize a raw path string using the standard root syntax.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the input is empty or uses malformed
/// drive syntax such as `c:foo`.
///
/// # Examples
///
/// ```
/// use docpath::path::normalize::normalize;
///
/// assert_eq!(normalize(r"assets\\shaders\").unwrap(), "assets/shaders");
/// assert_eq!(normalize("/").unwrap(), "/");
/// assert!(normalize("").is_err());
/// ```
pub fn normalize(raw: &str) -> Result<String> {
    normalize_with(raw, standard_syntax())
}

/// Join an already normalized base and tail with a single separator.
///
/// Equivalent to normalizing `base + "/" + tail` when both inputs are
/// normalized and `tail` is relative.
#[must_use]
pub(crate) fn join(base: &str, tail: &str) -> String {
    let tail = tail.trim_start_matches(SEPARATOR);
    if tail.is_empty() {
        return base.to_string();
    }

    let head = base.trim_end_matches(SEPARATOR);
    let mut joined = String::with_capacity(head.len() + tail.len() + 1);
    joined.push_str(head);
    joined.push(SEPARATOR);
    joined.push_str(tail);
    joined
}

/// Resolve `.` and `..` segments of a normalized path lexically.
///
/// `root_len` is the length of the path's root prefix (zero for a relative
/// path). Leading `..` segments of a relative path are kept; a relative
/// path that resolves to nothing becomes `.`.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if `..` would climb above an absolute root.
///
/// # Examples
///
/// ```
/// use docpath::path::normalize::resolve_dots;
///
/// assert_eq!(resolve_dots("/a/./b/../c", 1).unwrap(), "/a/c");
/// assert_eq!(resolve_dots("../a/../../b", 0).unwrap(), "../../b");
/// assert_eq!(resolve_dots("a/..", 0).unwrap(), ".");
/// assert!(resolve_dots("/a/../..", 1).is_err());
/// ```
pub fn resolve_dots(path: &str, root_len: usize) -> Result<String> {
    let (root, tail) = path.split_at(root_len.min(path.len()));
    let mut segments: Vec<&str> = Vec::new();

    for segment in tail.split(SEPARATOR).filter(|s| !s.is_empty()) {
        match segment {
            "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if root_len > 0 => {
                    return Err(Error::invalid_path(
                        path,
                        "path contains too many '..' segments (escapes root)",
                    ));
                }
                _ => segments.push(segment),
            },
            _ => segments.push(segment),
        }
    }

    if segments.is_empty() {
        return Ok(if root.is_empty() {
            ".".to_string()
        } else {
            root.to_string()
        });
    }

    let mut resolved = root.to_string();
    if !resolved.is_empty() && !resolved.ends_with(SEPARATOR) {
        resolved.push(SEPARATOR);
    }
    resolved.push_str(&segments.join("/"));
    Ok(resolved)
}
