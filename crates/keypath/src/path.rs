//! Separator handling and low-level traversal over nested containers.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Container;
use crate::error::{KeypathError, KeypathResult};

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = ".";

/// A non-empty string that splits a key path into segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Separator(String);

impl Separator {
    /// Create a separator.
    ///
    /// # Errors
    ///
    /// Returns [`KeypathError::EmptySeparator`] if `sep` is empty.
    pub fn new(sep: impl Into<String>) -> KeypathResult<Self> {
        let sep = sep.into();
        if sep.is_empty() {
            return Err(KeypathError::EmptySeparator);
        }
        Ok(Self(sep))
    }

    /// The separator as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split `path` into its segments.
    ///
    /// Always yields at least one segment; empty segments are kept.
    #[must_use]
    pub fn split<'p>(&self, path: &'p str) -> Vec<&'p str> {
        path.split(self.0.as_str()).collect()
    }

    /// Join segments back into a path string.
    #[must_use]
    pub fn join(&self, segments: &[&str]) -> String {
        segments.join(&self.0)
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self(DEFAULT_SEPARATOR.to_owned())
    }
}

impl Deref for Separator {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Separator {
    type Error = KeypathError;

    fn try_from(value: String) -> KeypathResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Separator {
    type Error = KeypathError;

    fn try_from(value: &str) -> KeypathResult<Self> {
        Self::new(value)
    }
}

impl From<Separator> for String {
    fn from(sep: Separator) -> Self {
        sep.0
    }
}

/// Navigate into a container by path segments.
///
/// Every hop except the first must land on an object; anything else ends
/// the walk with `None`.
pub(crate) fn get_nested<'a>(container: &'a Container, segments: &[&str]) -> Option<&'a Value> {
    let (first, rest) = segments.split_first()?;
    let mut current = container.get(*first)?;
    for segment in rest {
        current = current.as_object()?.get(*segment)?;
    }
    Some(current)
}

/// Mutable counterpart of [`get_nested`].
pub(crate) fn get_nested_mut<'a>(
    container: &'a mut Container,
    segments: &[&str],
) -> Option<&'a mut Value> {
    let (first, rest) = segments.split_first()?;
    let mut current = container.get_mut(*first)?;
    for segment in rest {
        current = current.as_object_mut()?.get_mut(*segment)?;
    }
    Some(current)
}

/// Build a container shaped exactly like `segments`, holding `value` at the
/// deepest key and nothing else.
///
/// `["a", "b", "c"]` with `1` becomes `{"a": {"b": {"c": 1}}}`. An empty
/// segment list yields an empty container.
pub(crate) fn build_skeleton(segments: &[&str], value: Value) -> Container {
    let mut skeleton = Container::new();
    let Some((first, rest)) = segments.split_first() else {
        return skeleton;
    };

    let inner = rest.iter().rev().fold(value, |acc, segment| {
        let mut wrapper = Container::new();
        wrapper.insert((*segment).to_owned(), acc);
        Value::Object(wrapper)
    });
    skeleton.insert((*first).to_owned(), inner);
    skeleton
}
