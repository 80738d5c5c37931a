//! Core types shared by directory and file paths.
//!
//! Both path flavours wrap the same [`PathData`] value: a normalized string,
//! the length of its root prefix (zero when relative), and an optional
//! provider. The two provider-precedence rules used by the combination
//! operations live here as separate helpers.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::normalize::{join, normalize_parts, resolve_dots};
use crate::path::provider::Provider;
use crate::path::root::{PathSyntax, SEPARATOR};

/// Read access common to [`DirectoryPath`](crate::DirectoryPath) and
/// [`FilePath`](crate::FilePath).
///
/// # Examples
///
/// ```
/// use docpath::{DirectoryPath, PathValue};
///
/// let path = DirectoryPath::with_provider("theme", "c:/layouts/partials/").unwrap();
/// assert_eq!(path.full_path(), "c:/layouts/partials");
/// assert_eq!(path.root(), "c:/");
/// assert_eq!(path.segments(), ["layouts", "partials"]);
/// assert!(path.is_absolute());
/// ```
pub trait PathValue {
    /// The normalized path string.
    fn full_path(&self) -> &str;

    /// The provider tag, if one was specified.
    fn provider(&self) -> Option<&Provider>;

    /// The root prefix of an absolute path; empty for a relative path.
    fn root(&self) -> &str;

    /// Whether the path is anchored at a namespace root.
    fn is_absolute(&self) -> bool {
        !self.root().is_empty()
    }

    /// Whether the path needs a base directory to be resolved.
    fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// The segments after the root, in order.
    fn segments(&self) -> Vec<&str> {
        self.full_path()[self.root().len()..]
            .split(SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct PathData {
    full_path: String,
    provider: Option<Provider>,
    root_len: usize,
}

impl PathData {
    pub(crate) fn parse(provider: Option<Provider>, raw: &str, syntax: &PathSyntax) -> Result<Self> {
        let normalized = normalize_parts(raw, syntax)?;
        Ok(Self {
            full_path: normalized.full_path,
            provider,
            root_len: normalized.root_len,
        })
    }

    pub(crate) fn full_path(&self) -> &str {
        &self.full_path
    }

    pub(crate) fn provider(&self) -> Option<&Provider> {
        self.provider.as_ref()
    }

    pub(crate) fn set_provider(&mut self, provider: Option<Provider>) {
        self.provider = provider;
    }

    pub(crate) fn root(&self) -> &str {
        &self.full_path[..self.root_len]
    }

    /// Segments after the root, skipping `.` placeholders.
    pub(crate) fn segments(&self) -> Vec<&str> {
        self.full_path[self.root_len..]
            .split(SEPARATOR)
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect()
    }

    pub(crate) fn is_absolute(&self) -> bool {
        self.root_len > 0
    }

    /// Whether nothing but the root remains.
    pub(crate) fn is_root(&self) -> bool {
        self.is_absolute()
            && self.full_path[self.root_len..]
                .chars()
                .all(|c| c == SEPARATOR)
    }

    /// The final segment; empty for a bare root.
    pub(crate) fn leaf(&self) -> &str {
        if self.is_root() {
            return "";
        }
        match self.full_path.rfind(SEPARATOR) {
            Some(idx) => &self.full_path[idx + 1..],
            None => &self.full_path,
        }
    }

    /// Everything before the final separator, keeping the provider.
    pub(crate) fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }

        let idx = self.full_path.rfind(SEPARATOR)?;
        let parent = if idx <= self.root_len {
            // Only the root is left; keep its separator.
            &self.full_path[..=idx]
        } else {
            &self.full_path[..idx]
        };

        Some(Self {
            full_path: parent.to_string(),
            provider: self.provider.clone(),
            root_len: self.root_len.min(parent.len()),
        })
    }

    /// Append a relative tail. The base's provider is kept unconditionally.
    pub(crate) fn join_relative(&self, tail: &str) -> Self {
        let full_path = join(&self.full_path, tail);

        // A root spelled without its separator (`c:`) absorbs the one
        // inserted by the join, so `c:` + `x` has the same root as `c:/x`.
        let root_len = if self.is_absolute()
            && !self.root().ends_with(SEPARATOR)
            && full_path[self.root_len..].starts_with(SEPARATOR)
        {
            self.root_len + SEPARATOR.len_utf8()
        } else {
            self.root_len
        };

        Self {
            full_path,
            provider: self.provider.clone(),
            root_len,
        }
    }

    /// Take an absolute operand verbatim. Its own provider wins; the base's
    /// provider is used only when the operand has none.
    pub(crate) fn adopt_absolute(&self, absolute: &Self) -> Self {
        let provider = match &absolute.provider {
            Some(provider) => Some(provider.clone()),
            None => {
                if let Some(base) = &self.provider {
                    log::debug!(
                        "'{}' carries no provider; keeping base provider '{base}'",
                        absolute.full_path
                    );
                }
                self.provider.clone()
            }
        };

        Self {
            full_path: absolute.full_path.clone(),
            provider,
            root_len: absolute.root_len,
        }
    }

    /// Replace the final segment.
    pub(crate) fn with_leaf(&self, leaf: &str) -> Self {
        match self.parent() {
            Some(parent) => parent.join_relative(leaf),
            None => Self {
                full_path: leaf.to_string(),
                provider: self.provider.clone(),
                root_len: 0,
            },
        }
    }

    /// Lexically resolve `.` and `..` segments.
    pub(crate) fn resolve_dots(&self) -> Result<Self> {
        Ok(Self {
            full_path: resolve_dots(&self.full_path, self.root_len)?,
            provider: self.provider.clone(),
            root_len: self.root_len,
        })
    }

    /// A relative path value built from segments.
    pub(crate) fn relative(segments: &[&str], provider: Option<Provider>) -> Self {
        let full_path = if segments.is_empty() {
            ".".to_string()
        } else {
            segments.join("/")
        };
        Self {
            full_path,
            provider,
            root_len: 0,
        }
    }
}

impl PartialEq for PathData {
    fn eq(&self, other: &Self) -> bool {
        self.full_path == other.full_path && self.provider == other.provider
    }
}

impl Eq for PathData {}

impl Hash for PathData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full_path.hash(state);
        self.provider.hash(state);
    }
}

/// Serialized form of a path value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RawPath {
    pub(crate) path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) provider: Option<Provider>,
}

impl From<PathData> for RawPath {
    fn from(data: PathData) -> Self {
        Self {
            path: data.full_path,
            provider: data.provider,
        }
    }
}
