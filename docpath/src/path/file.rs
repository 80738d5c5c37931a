//! File paths and leaf-name decomposition.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::directory::DirectoryPath;
use crate::path::provider::Provider;
use crate::path::root::{standard_syntax, PathSyntax};
use crate::path::types::{PathData, PathValue, RawPath};

/// A path whose final segment names a file.
///
/// The final segment splits into a stem and an extension at its last `.`;
/// everything before the final separator is the directory.
///
/// # Examples
///
/// ```
/// use docpath::{FilePath, PathValue};
///
/// let file = FilePath::new("assets/shaders/simple.frag").unwrap();
/// assert_eq!(file.get_file_name(), "simple.frag");
/// assert_eq!(file.get_filename_without_extension(), "simple");
/// assert_eq!(file.get_extension(), ".frag");
/// assert_eq!(file.get_directory().unwrap().full_path(), "assets/shaders");
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
pub struct FilePath(pub(crate) PathData);

impl FilePath {
    /// Create a file path without a provider, using the standard root syntax.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `path` is empty, malformed, or does
    /// not end in a file name.
    pub fn new(path: &str) -> Result<Self> {
        Self::from_parts(None, path, standard_syntax())
    }

    /// Create a file path belonging to `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProvider`] if `provider` is blank, or the
    /// errors of [`FilePath::new`].
    pub fn with_provider(provider: &str, path: &str) -> Result<Self> {
        Self::from_parts(Some(Provider::new(provider)?), path, standard_syntax())
    }

    /// Create a file path with an explicit root syntax.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `path` is empty, malformed, or does
    /// not end in a file name.
    pub fn from_parts(provider: Option<Provider>, path: &str, syntax: &PathSyntax) -> Result<Self> {
        Self::validated(PathData::parse(provider, path, syntax)?)
    }

    /// Create a file path from arguments that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullArgument`] if `path` is `None`, and the errors of
    /// [`FilePath::from_parts`] otherwise.
    pub fn from_raw(provider: Option<&str>, path: Option<&str>, syntax: &PathSyntax) -> Result<Self> {
        let path = path.ok_or(Error::NullArgument { argument: "path" })?;
        Self::from_parts(Provider::optional(provider)?, path, syntax)
    }

    fn validated(data: PathData) -> Result<Self> {
        match data.leaf() {
            "" | "." | ".." => Err(Error::invalid_path(
                data.full_path(),
                "file path must end in a file name",
            )),
            _ => Ok(Self(data)),
        }
    }

    /// The same path under a different provider.
    #[must_use]
    pub fn retag(&self, provider: Option<Provider>) -> Self {
        let mut data = self.0.clone();
        data.set_provider(provider);
        Self(data)
    }

    /// The final segment, e.g. `simple.frag`.
    #[must_use]
    pub fn get_file_name(&self) -> &str {
        self.0.leaf()
    }

    /// The file name up to its last `.`, e.g. `simple`.
    ///
    /// A file name ending in `.` has that dot removed; a name without a dot
    /// is returned whole.
    #[must_use]
    pub fn get_filename_without_extension(&self) -> &str {
        split_extension(self.get_file_name()).0
    }

    /// The extension including its leading `.`, e.g. `.frag`.
    ///
    /// Empty when the file name has no `.` or ends with one.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpath::FilePath;
    ///
    /// assert_eq!(FilePath::new("archive.tar.gz").unwrap().get_extension(), ".gz");
    /// assert_eq!(FilePath::new("README").unwrap().get_extension(), "");
    /// assert_eq!(FilePath::new(".gitignore").unwrap().get_extension(), ".gitignore");
    /// ```
    #[must_use]
    pub fn get_extension(&self) -> &str {
        split_extension(self.get_file_name()).1
    }

    /// Whether the file name has a non-empty extension.
    #[must_use]
    pub fn has_extension(&self) -> bool {
        !self.get_extension().is_empty()
    }

    /// Everything before the final separator, or `None` for a bare file name.
    ///
    /// The directory keeps this path's provider.
    #[must_use]
    pub fn get_directory(&self) -> Option<DirectoryPath> {
        self.0.parent().map(DirectoryPath)
    }

    /// Replace the extension. An empty `extension` removes it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if removing the extension would leave
    /// no file name.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpath::{FilePath, PathValue};
    ///
    /// let post = FilePath::new("posts/first.md").unwrap();
    /// assert_eq!(post.change_extension("html").unwrap().full_path(), "posts/first.html");
    /// assert_eq!(post.change_extension(".txt").unwrap().full_path(), "posts/first.txt");
    /// assert_eq!(post.change_extension("").unwrap().full_path(), "posts/first");
    /// ```
    pub fn change_extension(&self, extension: &str) -> Result<FilePath> {
        let stem = self.get_filename_without_extension();
        let extension = extension.trim_start_matches('.');
        let leaf = if extension.is_empty() {
            if stem.is_empty() {
                return Err(Error::invalid_path(
                    self.0.full_path(),
                    "removing the extension leaves no file name",
                ));
            }
            stem.to_string()
        } else {
            format!("{stem}.{extension}")
        };
        Self::validated(self.0.with_leaf(&leaf))
    }

    /// Append an extension after the existing one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `extension` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpath::{FilePath, PathValue};
    ///
    /// let archive = FilePath::new("dist/site.tar").unwrap();
    /// assert_eq!(archive.append_extension("gz").unwrap().full_path(), "dist/site.tar.gz");
    /// ```
    pub fn append_extension(&self, extension: &str) -> Result<FilePath> {
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(Error::invalid_path(
                self.0.full_path(),
                "cannot append an empty extension",
            ));
        }
        let leaf = format!("{}.{extension}", self.get_file_name());
        Self::validated(self.0.with_leaf(&leaf))
    }

    /// Resolve `.` and `..` segments lexically.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `..` would climb above the root or
    /// the path no longer ends in a file name.
    pub fn collapse(&self) -> Result<FilePath> {
        Self::validated(self.0.resolve_dots()?)
    }

    /// Map this file from `source_root` to the same relative location under
    /// `destination_root`.
    ///
    /// The result takes `destination_root`'s provider.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if this file cannot be expressed
    /// relative to `source_root`.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpath::{DirectoryPath, FilePath, PathValue};
    ///
    /// let input = DirectoryPath::new("/site/input").unwrap();
    /// let output = DirectoryPath::with_provider("dist", "/site/output").unwrap();
    /// let image = FilePath::new("/site/input/img/logo.png").unwrap();
    ///
    /// let copied = image.map_to(&input, &output).unwrap();
    /// assert_eq!(copied.full_path(), "/site/output/img/logo.png");
    /// assert_eq!(copied.provider().unwrap().as_str(), "dist");
    /// ```
    pub fn map_to(
        &self,
        source_root: &DirectoryPath,
        destination_root: &DirectoryPath,
    ) -> Result<FilePath> {
        let relative = source_root.get_relative_file_path(self)?;
        Ok(destination_root.combine_file(&relative))
    }
}

/// Split a file name at its last `.` into stem and extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx + 1 == name.len() => (&name[..idx], ""),
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

impl PathValue for FilePath {
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

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.full_path())
    }
}

impl FromStr for FilePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<RawPath> for FilePath {
    type Error = Error;

    fn try_from(raw: RawPath) -> Result<Self> {
        Self::from_parts(raw.provider, &raw.path, standard_syntax())
    }
}

impl From<FilePath> for RawPath {
    fn from(path: FilePath) -> Self {
        path.0.into()
    }
}
