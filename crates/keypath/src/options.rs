//! Accessor options and their TOML loading.
//!
//! The defaults reproduce the compatible `remove` behaviour: values are
//! nulled instead of deleted, the parent path is rejoined with `.`, and a
//! single-segment path is left alone.
//!
//! ```toml
//! separator = "/"
//! remove_mode = "delete"
//! parent_join = "separator"
//! root_remove = "apply"
//! ```

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{KeypathError, KeypathResult};
use crate::path::Separator;

/// Maximum allowed options file size (64 KiB).
const MAX_OPTIONS_FILE_SIZE: u64 = 65_536;

/// Bytes read from an options file before giving up on it.
const OPTIONS_READ_LIMIT: u64 = MAX_OPTIONS_FILE_SIZE.saturating_add(1);

/// What `remove` does with the targeted key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoveMode {
    /// Keep the key and set its value to `null` (default).
    #[default]
    Nullify,
    /// Drop the key from its parent entirely.
    Delete,
}

/// How `remove` rebuilds the parent path from the leading segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentJoin {
    /// Always join with `.`, whatever the configured separator (default).
    ///
    /// With a custom separator and three or more segments the parent lookup
    /// then misses and `remove` is a no-op.
    #[default]
    Dot,
    /// Join with the configured separator.
    Separator,
}

/// How `remove` treats a path with a single segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootRemove {
    /// Look up the parent under the key `""` like any other path, which
    /// normally misses and leaves the container unchanged (default).
    #[default]
    Ignore,
    /// Apply the removal directly to the top-level container.
    Apply,
}

/// Options for a [`NestedAccessor`](crate::NestedAccessor).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccessorOptions {
    /// Separator between path segments.
    pub separator: Separator,
    /// What `remove` does with the targeted key.
    pub remove_mode: RemoveMode,
    /// How `remove` rebuilds the parent path.
    pub parent_join: ParentJoin,
    /// How `remove` treats single-segment paths.
    pub root_remove: RootRemove,
}

impl AccessorOptions {
    /// Options with the given separator and compatible remove behaviour.
    ///
    /// # Errors
    ///
    /// Returns [`KeypathError::EmptySeparator`] if `sep` is empty.
    pub fn new(sep: impl Into<String>) -> KeypathResult<Self> {
        Ok(Self {
            separator: Separator::new(sep)?,
            ..Self::default()
        })
    }

    /// Options that make `remove` delete keys at any depth and honour the
    /// configured separator throughout.
    #[must_use]
    pub fn deleting(separator: Separator) -> Self {
        Self {
            separator,
            remove_mode: RemoveMode::Delete,
            parent_join: ParentJoin::Separator,
            root_remove: RootRemove::Apply,
        }
    }

    /// Set the remove mode.
    #[must_use]
    pub fn with_remove_mode(mut self, mode: RemoveMode) -> Self {
        self.remove_mode = mode;
        self
    }

    /// Set the parent-join policy.
    #[must_use]
    pub fn with_parent_join(mut self, join: ParentJoin) -> Self {
        self.parent_join = join;
        self
    }

    /// Set the single-segment remove policy.
    #[must_use]
    pub fn with_root_remove(mut self, root: RootRemove) -> Self {
        self.root_remove = root;
        self
    }

    /// Parse options from a TOML string. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`KeypathError::ParseError`] if the TOML is malformed, names
    /// an unknown field, or sets an empty separator.
    pub fn from_toml_str(content: &str) -> KeypathResult<Self> {
        parse(content, "<inline>")
    }

    /// Load options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`KeypathError`] if the file cannot be read, is larger than
    /// the size limit, or does not parse.
    pub fn load_file(path: &Path) -> KeypathResult<Self> {
        let read_error = |source: io::Error| KeypathError::ReadError {
            path: path.display().to_string(),
            source,
        };

        // One byte past the limit is enough to tell an oversized file apart.
        let mut bytes = Vec::new();
        File::open(path)
            .and_then(|file| file.take(OPTIONS_READ_LIMIT).read_to_end(&mut bytes))
            .map_err(read_error)?;

        if bytes.len() as u64 > MAX_OPTIONS_FILE_SIZE {
            return Err(KeypathError::ValidationError {
                field: path.display().to_string(),
                message: format!("options file is larger than {MAX_OPTIONS_FILE_SIZE} bytes"),
            });
        }

        let content = String::from_utf8(bytes)
            .map_err(|e| read_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        let options = parse(&content, &path.display().to_string())?;
        debug!(
            path = %path.display(),
            separator = %options.separator,
            "loaded accessor options"
        );
        Ok(options)
    }
}

fn parse(content: &str, origin: &str) -> KeypathResult<AccessorOptions> {
    toml::from_str(content).map_err(|e| KeypathError::ParseError {
        path: origin.to_owned(),
        source: e,
    })
}
