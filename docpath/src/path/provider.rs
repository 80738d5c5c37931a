//! Provider tags.
//!
//! A provider names the backing source a path belongs to (local disk, a
//! packaged theme, a remote archive). Tags are opaque here: they are compared
//! by value and carried alongside paths, never resolved.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A non-empty provider tag.
///
/// # Examples
///
/// ```
/// use docpath::Provider;
///
/// let theme = Provider::new("theme").unwrap();
/// assert_eq!(theme.as_str(), "theme");
/// assert!(Provider::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Provider(String);

impl Provider {
    /// Create a provider tag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProvider`] if the tag is empty or blank.
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(Error::InvalidProvider {
                reason: "provider must not be empty".to_string(),
            });
        }
        Ok(Self(tag))
    }

    /// Create a provider tag from an argument that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullArgument`] if `tag` is `None`, or
    /// [`Error::InvalidProvider`] if it is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpath::Provider;
    ///
    /// assert!(Provider::required(None).unwrap_err().is_null_argument());
    /// assert_eq!(Provider::required(Some("site")).unwrap().as_str(), "site");
    /// ```
    pub fn required(tag: Option<&str>) -> Result<Self> {
        let tag = tag.ok_or(Error::NullArgument {
            argument: "provider",
        })?;
        Self::new(tag)
    }

    /// Parse an optional tag, mapping `None` to the default source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProvider`] if a tag is given but blank.
    pub fn optional(tag: Option<&str>) -> Result<Option<Self>> {
        tag.map(Self::new).transpose()
    }

    /// The tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Provider {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Provider> for String {
    fn from(provider: Provider) -> Self {
        provider.0
    }
}

impl AsRef<str> for Provider {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
