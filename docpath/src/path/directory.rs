//! Directory paths and the combination algebra.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::file::FilePath;
use crate::path::provider::Provider;
use crate::path::relationship::same_root;
use crate::path::root::{standard_syntax, PathSyntax};
use crate::path::types::{PathData, PathValue, RawPath};

/// A path whose final segment denotes a directory (or which is a bare root).
///
/// Values are immutable; every operation returns a new path.
///
/// # Examples
///
/// ```
/// use docpath::{DirectoryPath, FilePath, PathValue};
///
/// let shaders = DirectoryPath::new("assets/shaders").unwrap();
/// let file = FilePath::new("test/simple.frag").unwrap();
///
/// assert_eq!(shaders.get_file_path(&file).full_path(), "assets/shaders/simple.frag");
/// assert_eq!(shaders.combine_file(&file).full_path(), "assets/shaders/test/simple.frag");
/// ```
///
/// # Serialization
///
/// The serialized form is `{ path, provider }`; the root syntax is not
/// recorded. Deserializing always reparses with [`PathSyntax::standard`], so
/// a value built with another syntax may change absoluteness on a round
/// trip. Rebuild it with `from_parts` under the original syntax when that
/// matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPath", into = "RawPath")]
pub struct DirectoryPath(pub(crate) PathData);

impl DirectoryPath {
    /// Create a directory path without a provider, using the standard root
    /// syntax.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `path` is empty or malformed.
    pub fn new(path: &str) -> Result<Self> {
        Self::from_parts(None, path, standard_syntax())
    }

    /// Create a directory path belonging to `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProvider`] if `provider` is blank, or
    /// [`Error::InvalidPath`] if `path` is empty or malformed.
    pub fn with_provider(provider: &str, path: &str) -> Result<Self> {
        Self::from_parts(Some(Provider::new(provider)?), path, standard_syntax())
    }

    /// Create a directory path with an explicit root syntax.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `path` is empty or malformed.
    pub fn from_parts(provider: Option<Provider>, path: &str, syntax: &PathSyntax) -> Result<Self> {
        PathData::parse(provider, path, syntax).map(Self)
    }

    /// Create a directory path from arguments that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullArgument`] if `path` is `None`, and the errors of
    /// [`DirectoryPath::from_parts`] otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpath::{DirectoryPath, PathSyntax};
    ///
    /// let err = DirectoryPath::from_raw(Some("site"), None, &PathSyntax::standard()).unwrap_err();
    /// assert!(err.is_null_argument());
    /// ```
    pub fn from_raw(provider: Option<&str>, path: Option<&str>, syntax: &PathSyntax) -> Result<Self> {
        let path = path.ok_or(Error::NullArgument { argument: "path" })?;
        Self::from_parts(Provider::optional(provider)?, path, syntax)
    }

    /// The same path under a different provider.
    #[must_use]
    pub fn retag(&self, provider: Option<Provider>) -> Self {
        let mut data = self.0.clone();
        data.set_provider(provider);
        Self(data)
    }

    /// Combine with another directory path.
    ///
    /// - An absolute `other` is returned verbatim. Its provider is kept if it
    ///   has one; otherwise this path's provider is used.
    /// - A relative `other` is appended to this path. The result always has
    ///   this path's provider; `other`'s provider is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpath::{DirectoryPath, PathValue};
    ///
    /// let base = DirectoryPath::with_provider("first", "/assets/shaders/").unwrap();
    ///
    /// let nested = base.combine(&DirectoryPath::with_provider("second", "simple").unwrap());
    /// assert_eq!(nested.full_path(), "/assets/shaders/simple");
    /// assert_eq!(nested.provider().unwrap().as_str(), "first");
    ///
    /// let elsewhere = base.combine(&DirectoryPath::with_provider("second", "/other").unwrap());
    /// assert_eq!(elsewhere.full_path(), "/other");
    /// assert_eq!(elsewhere.provider().unwrap().as_str(), "second");
    /// ```
    #[must_use]
    pub fn combine(&self, other: &DirectoryPath) -> DirectoryPath {
        if other.0.is_absolute() {
            Self(self.0.adopt_absolute(&other.0))
        } else {
            Self(self.0.join_relative(other.0.full_path()))
        }
    }

    /// [`DirectoryPath::combine`] with an argument that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullArgument`] if `other` is `None`.
    pub fn checked_combine(&self, other: Option<&DirectoryPath>) -> Result<DirectoryPath> {
        other
            .map(|other| self.combine(other))
            .ok_or(Error::NullArgument { argument: "other" })
    }

    /// Combine with a file path, preserving the file's own structure.
    ///
    /// - An absolute `file` is returned verbatim, keeping its provider if it
    ///   has one and taking this path's provider otherwise.
    /// - A relative `file` is appended in full, subdirectories included. The
    ///   result always has this path's provider.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpath::{DirectoryPath, FilePath, PathValue};
    ///
    /// let assets = DirectoryPath::new("assets").unwrap();
    /// let other = assets.combine_file(&FilePath::new("/other/asset.txt").unwrap());
    /// assert_eq!(other.full_path(), "/other/asset.txt");
    /// ```
    #[must_use]
    pub fn combine_file(&self, file: &FilePath) -> FilePath {
        if file.0.is_absolute() {
            FilePath(self.0.adopt_absolute(&file.0))
        } else {
            FilePath(self.0.join_relative(file.0.full_path()))
        }
    }

    /// [`DirectoryPath::combine_file`] with an argument that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullArgument`] if `file` is `None`.
    pub fn checked_combine_file(&self, file: Option<&FilePath>) -> Result<FilePath> {
        file.map(|file| self.combine_file(file))
            .ok_or(Error::NullArgument { argument: "file" })
    }

    /// Rebase a file under this directory using only its file name.
    ///
    /// Any directories in `file` are dropped, even when `file` is absolute.
    /// The result always has this path's provider.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpath::{DirectoryPath, FilePath, PathValue};
    ///
    /// let root = DirectoryPath::with_provider("first", "c:/").unwrap();
    /// let file = FilePath::with_provider("second", "c:/test/simple.frag").unwrap();
    ///
    /// let rebased = root.get_file_path(&file);
    /// assert_eq!(rebased.full_path(), "c:/simple.frag");
    /// assert_eq!(rebased.provider().unwrap().as_str(), "first");
    /// ```
    #[must_use]
    pub fn get_file_path(&self, file: &FilePath) -> FilePath {
        FilePath(self.0.join_relative(file.get_file_name()))
    }

    /// [`DirectoryPath::get_file_path`] with an argument that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullArgument`] if `file` is `None`.
    pub fn checked_get_file_path(&self, file: Option<&FilePath>) -> Result<FilePath> {
        file.map(|file| self.get_file_path(file))
            .ok_or(Error::NullArgument { argument: "file" })
    }

    /// The final segment of this path; empty for a bare root.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpath::DirectoryPath;
    ///
    /// assert_eq!(DirectoryPath::new("C:/Data/Work").unwrap().get_directory_name(), "Work");
    /// assert_eq!(DirectoryPath::new("C:/").unwrap().get_directory_name(), "");
    /// ```
    #[must_use]
    pub fn get_directory_name(&self) -> &str {
        self.0.leaf()
    }

    /// The containing directory, or `None` for a root or single segment.
    #[must_use]
    pub fn parent(&self) -> Option<DirectoryPath> {
        self.0.parent().map(Self)
    }

    /// Whether this path is a bare root such as `/` or `c:/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_root()
    }

    /// Resolve `.` and `..` segments lexically.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `..` would climb above the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpath::{DirectoryPath, PathValue};
    ///
    /// let path = DirectoryPath::new("/input/./posts/../pages").unwrap();
    /// assert_eq!(path.collapse().unwrap().full_path(), "/input/pages");
    /// ```
    pub fn collapse(&self) -> Result<DirectoryPath> {
        self.0.resolve_dots().map(Self)
    }

    /// The relative path leading from this directory to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the paths belong to different
    /// providers, differ in absoluteness or root, or if this path climbs
    /// above its origin with `..`.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpath::{DirectoryPath, PathValue};
    ///
    /// let from = DirectoryPath::new("/site/posts").unwrap();
    /// let to = DirectoryPath::new("/site/assets/css").unwrap();
    /// assert_eq!(from.get_relative_path(&to).unwrap().full_path(), "../assets/css");
    /// ```
    pub fn get_relative_path(&self, target: &DirectoryPath) -> Result<DirectoryPath> {
        let segments = self.relative_segments(&target.0, false)?;
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
        Ok(Self(PathData::relative(&segments, self.0.provider().cloned())))
    }

    /// The relative path leading from this directory to `file`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`DirectoryPath::get_relative_path`].
    ///
    /// # Examples
    ///
    /// ```
    /// use docpath::{DirectoryPath, FilePath, PathValue};
    ///
    /// let input = DirectoryPath::new("c:/input").unwrap();
    /// let file = FilePath::new("c:/input/posts/first.md").unwrap();
    /// assert_eq!(input.get_relative_file_path(&file).unwrap().full_path(), "posts/first.md");
    /// ```
    pub fn get_relative_file_path(&self, file: &FilePath) -> Result<FilePath> {
        let segments = self.relative_segments(&file.0, true)?;
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
        Ok(FilePath(PathData::relative(
            &segments,
            self.0.provider().cloned(),
        )))
    }

    /// Segments walking from this directory to `target`. With `keep_leaf`,
    /// the target's final segment is never matched against this path.
    fn relative_segments(&self, target: &PathData, keep_leaf: bool) -> Result<Vec<String>> {
        let mismatch = |reason: &str| Error::invalid_path(target.full_path(), reason.to_string());

        if self.0.provider() != target.provider() {
            return Err(mismatch("paths belong to different providers"));
        }
        if self.0.is_absolute() != target.is_absolute() {
            return Err(mismatch("cannot relate an absolute path to a relative one"));
        }
        if !same_root(self.0.root(), target.root()) {
            return Err(mismatch("paths have different roots"));
        }

        let from = self.0.resolve_dots()?;
        let to = target.resolve_dots()?;
        let from_segments = from.segments();
        let mut to_segments = to.segments();

        let leaf = if keep_leaf { to_segments.pop() } else { None };

        let common = from_segments
            .iter()
            .zip(&to_segments)
            .take_while(|(a, b)| a == b)
            .count();

        if from_segments[common..].contains(&"..") {
            return Err(Error::invalid_path(
                self.0.full_path(),
                "cannot walk up from a path that climbs above its origin",
            ));
        }

        let mut segments: Vec<String> = std::iter::repeat("..".to_string())
            .take(from_segments.len() - common)
            .collect();
        segments.extend(to_segments[common..].iter().map(|s| (*s).to_string()));
        segments.extend(leaf.map(str::to_string));
        Ok(segments)
    }
}

impl PathValue for DirectoryPath {
    fn full_path(&self) -> &str {
        self.0.full_path()
    }

    fn provider(&self) -> Option<&Provider> {
        self.0.provider()
    }

    fn root(&self) -> &str {
        self.0.root()
    }
}

impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.full_path())
    }
}

impl FromStr for DirectoryPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<RawPath> for DirectoryPath {
    type Error = Error;

    fn try_from(raw: RawPath) -> Result<Self> {
        Self::from_parts(raw.provider, &raw.path, standard_syntax())
    }
}

impl From<DirectoryPath> for RawPath {
    fn from(path: DirectoryPath) -> Self {
        path.0.into()
    }
}
