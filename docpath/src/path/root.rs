//! Absolute-path detection.
//!
//! Whether a path is absolute is decided by a [`PathSyntax`]: an ordered set
//! of [`RootSyntax`] rules, each of which recognises one family of root
//! prefixes. The combination operations only ever ask a path whether it is
//! absolute, so new root families can be introduced by implementing
//! [`RootSyntax`] without touching them.

use std::fmt;
use std::sync::{Arc, OnceLock};

/// The canonical separator used in every normalized path.
pub const SEPARATOR: char = '/';

/// Outcome of matching a root syntax against the start of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootMatch {
    /// The path starts with a root of this many bytes.
    Root(usize),
    /// The path does not start with a root of this syntax.
    NoMatch,
    /// The path starts like a root of this syntax but is malformed.
    Malformed(&'static str),
}

/// A rule recognising one family of absolute-path roots.
///
/// Implementations receive a path whose separators are already unified to
/// [`SEPARATOR`] and collapsed, and report how long its root prefix is.
///
/// # Examples
///
/// ```
/// use docpath::path::{PathSyntax, RootMatch, RootSyntax};
///
/// /// Treats `~` and `~/...` as anchored at a home root.
/// #[derive(Debug)]
/// struct HomeRoot;
///
/// impl RootSyntax for HomeRoot {
///     fn name(&self) -> &str {
///         "home"
///     }
///
///     fn match_root(&self, path: &str) -> RootMatch {
///         match path.strip_prefix('~') {
///             Some("") => RootMatch::Root(1),
///             Some(rest) if rest.starts_with('/') => RootMatch::Root(2),
///             _ => RootMatch::NoMatch,
///         }
///     }
/// }
///
/// let syntax = PathSyntax::standard().with_root(HomeRoot);
/// assert!(syntax.is_absolute("~/notes"));
/// assert!(!PathSyntax::standard().is_absolute("~/notes"));
/// ```
pub trait RootSyntax: fmt::Debug + Send + Sync {
    /// Short identifier for diagnostics.
    fn name(&self) -> &str;

    /// Match the start of `path` against this syntax.
    fn match_root(&self, path: &str) -> RootMatch;
}

/// Paths anchored at the canonical separator, e.g. `/assets`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeparatorRoot;

impl RootSyntax for SeparatorRoot {
    fn name(&self) -> &str {
        "separator"
    }

    fn match_root(&self, path: &str) -> RootMatch {
        if path.starts_with(SEPARATOR) {
            RootMatch::Root(1)
        } else {
            RootMatch::NoMatch
        }
    }
}

/// Drive roots: a single ASCII letter and a colon, optionally followed by
/// the separator (`c:`, `C:/`).
///
/// A drive prefix followed by anything other than a separator (`c:foo`) is
/// reported as malformed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriveRoot;

impl RootSyntax for DriveRoot {
    fn name(&self) -> &str {
        "drive"
    }

    fn match_root(&self, path: &str) -> RootMatch {
        let bytes = path.as_bytes();
        if bytes.len() < 2 || !bytes[0].is_ascii_alphabetic() || bytes[1] != b':' {
            return RootMatch::NoMatch;
        }

        match bytes.get(2) {
            None => RootMatch::Root(2),
            Some(b'/') => RootMatch::Root(3),
            Some(_) => RootMatch::Malformed("drive letter must be followed by a separator"),
        }
    }
}

/// An ordered set of root syntaxes.
///
/// The first syntax that matches wins. A malformed match is only reported
/// when no other syntax recognises the path.
#[derive(Clone)]
pub struct PathSyntax {
    roots: Vec<Arc<dyn RootSyntax>>,
}

impl PathSyntax {
    /// A syntax with no roots: every path is relative.
    #[must_use]
    pub fn empty() -> Self {
        Self { roots: Vec::new() }
    }

    /// Separator and drive roots.
    #[must_use]
    pub fn standard() -> Self {
        standard_syntax().clone()
    }

    /// Append a root syntax, returning the extended set.
    #[must_use]
    pub fn with_root<R: RootSyntax + 'static>(mut self, root: R) -> Self {
        self.roots.push(Arc::new(root));
        self
    }

    /// Append an already shared root syntax.
    #[must_use]
    pub fn with_shared_root(mut self, root: Arc<dyn RootSyntax>) -> Self {
        self.roots.push(root);
        self
    }

    /// Names of the configured root syntaxes, in match order.
    pub fn root_names(&self) -> impl Iterator<Item = &str> {
        self.roots.iter().map(|root| root.name())
    }

    /// Length of the root prefix of `path`, or `None` for a relative path.
    ///
    /// # Errors
    ///
    /// Returns the reason reported by a syntax when the path is malformed and
    /// no syntax accepts it.
    pub fn root_len(&self, path: &str) -> Result<Option<usize>, &'static str> {
        let mut malformed = None;

        for root in &self.roots {
            match root.match_root(path) {
                RootMatch::Root(len) => return Ok(Some(len)),
                RootMatch::Malformed(reason) => {
                    malformed.get_or_insert(reason);
                }
                RootMatch::NoMatch => {}
            }
        }

        match malformed {
            Some(reason) => Err(reason),
            None => Ok(None),
        }
    }

    /// Whether `path` starts with a root of any configured syntax.
    ///
    /// Malformed paths are not absolute.
    #[must_use]
    pub fn is_absolute(&self, path: &str) -> bool {
        matches!(self.root_len(path), Ok(Some(_)))
    }
}

impl Default for PathSyntax {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for PathSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.root_names()).finish()
    }
}

pub(crate) fn standard_syntax() -> &'static PathSyntax {
    static STANDARD: OnceLock<PathSyntax> = OnceLock::new();
    STANDARD.get_or_init(|| PathSyntax::empty().with_root(SeparatorRoot).with_root(DriveRoot))
}

/// Whether a normalized path is absolute under the standard syntax.
///
/// # Examples
///
/// ```
/// use docpath::path::is_absolute;
///
/// assert!(is_absolute("/assets"));
/// assert!(is_absolute("C:/Data"));
/// assert!(is_absolute("c:"));
/// assert!(!is_absolute("assets/shaders"));
/// ```
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    standard_syntax().is_absolute(path)
}
