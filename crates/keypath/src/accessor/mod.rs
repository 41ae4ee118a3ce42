//! Path-keyed access into nested containers.
//!
//! Every operation takes the container by reference. `set` and `remove`
//! hand back an updated copy; the caller's container is never touched.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, trace};

use crate::Container;
use crate::error::KeypathResult;
use crate::flatten::flatten;
use crate::merge::merge_containers;
use crate::options::{AccessorOptions, ParentJoin, RemoveMode, RootRemove};
use crate::path::{DEFAULT_SEPARATOR, Separator, build_skeleton, get_nested, get_nested_mut};

/// Reads and writes nested containers by delimited key path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NestedAccessor {
    options: AccessorOptions,
}

impl NestedAccessor {
    /// Create an accessor from options.
    #[must_use]
    pub fn new(options: AccessorOptions) -> Self {
        Self { options }
    }

    /// Create an accessor splitting on `sep`, with compatible remove
    /// behaviour.
    ///
    /// # Errors
    ///
    /// Returns [`KeypathError::EmptySeparator`](crate::KeypathError::EmptySeparator)
    /// if `sep` is empty.
    pub fn with_separator(sep: impl Into<String>) -> KeypathResult<Self> {
        AccessorOptions::new(sep).map(Self::new)
    }

    /// The options this accessor was built with.
    #[must_use]
    pub fn options(&self) -> &AccessorOptions {
        &self.options
    }

    /// The separator between path segments.
    #[must_use]
    pub fn separator(&self) -> &Separator {
        &self.options.separator
    }

    /// Look up the value at `path`.
    ///
    /// Returns `None` when any segment is missing, when an intermediate value
    /// is not an object, or when the stored value is `null`. Use
    /// [`get_entry`](Self::get_entry) to tell a stored `null` apart from a
    /// missing key.
    #[must_use]
    pub fn get<'a>(&self, path: &str, container: &'a Container) -> Option<&'a Value> {
        self.get_entry(path, container).filter(|val| !val.is_null())
    }

    /// Look up the value at `path`, reporting a stored `null` as
    /// `Some(&Value::Null)`.
    #[must_use]
    pub fn get_entry<'a>(&self, path: &str, container: &'a Container) -> Option<&'a Value> {
        let segments = self.options.separator.split(path);
        let found = get_nested(container, &segments);
        if found.is_none() {
            trace!(path, "key path not found");
        }
        found
    }

    /// Whether `path` resolves to a value, `null` included.
    #[must_use]
    pub fn contains(&self, path: &str, container: &Container) -> bool {
        self.get_entry(path, container).is_some()
    }

    /// Return a copy of `container` with `value` stored at `path`.
    ///
    /// A single-segment path overwrites that key directly. Deeper paths are
    /// turned into a skeleton holding only `value` and deep-merged into the
    /// copy: sibling keys survive at every depth, a leaf replaces whatever
    /// was there, and an object value merges with an object already stored
    /// at `path`. Missing intermediate objects are created, and intermediate
    /// leaves are replaced by objects.
    #[must_use]
    pub fn set(&self, path: &str, value: impl Into<Value>, container: &Container) -> Container {
        let segments = self.options.separator.split(path);

        if let [key] = segments.as_slice() {
            let mut updated = container.clone();
            updated.insert((*key).to_owned(), value.into());
            return updated;
        }

        let skeleton = build_skeleton(&segments, value.into());
        merge_containers(container, &skeleton)
    }

    /// Return a copy of `container` with the value at `path` cleared.
    ///
    /// The parent path must resolve to an object, otherwise the container
    /// comes back unchanged. With default options the value is set to
    /// `null` and the key is kept, the parent path is rebuilt with `.`
    /// whatever the separator, and single-segment paths are a no-op unless
    /// the top level holds a `""` key. See [`AccessorOptions`] for the
    /// alternatives.
    #[must_use]
    pub fn remove(&self, path: &str, container: &Container) -> Container {
        let separator = &self.options.separator;
        let mut segments = separator.split(path);
        let Some(key) = segments.pop() else {
            return container.clone();
        };

        if segments.is_empty() && self.options.root_remove == RootRemove::Apply {
            let mut updated = container.clone();
            self.clear_key(&mut updated, key);
            return updated;
        }

        let parent_path = match self.options.parent_join {
            ParentJoin::Dot => segments.join(DEFAULT_SEPARATOR),
            ParentJoin::Separator => separator.join(&segments),
        };

        let Some(Value::Object(parent)) = self.get(&parent_path, container) else {
            debug!(path, parent_path = %parent_path, "remove skipped, parent is not a container");
            return container.clone();
        };

        let mut parent = parent.clone();
        self.clear_key(&mut parent, key);

        match self.options.remove_mode {
            RemoveMode::Nullify => self.set(&parent_path, Value::Object(parent), container),
            // A merge never drops keys, so the parent is swapped in whole.
            RemoveMode::Delete => self.replace(&parent_path, Value::Object(parent), container),
        }
    }

    /// Return a copy of `container` with the key at `path` deleted.
    ///
    /// Unlike [`remove`](Self::remove) with default options, this drops the
    /// key instead of nulling it, rebuilds the parent path with this
    /// accessor's separator, and works on single-segment paths.
    #[must_use]
    pub fn remove_key(&self, path: &str, container: &Container) -> Container {
        Self::new(AccessorOptions::deleting(self.options.separator.clone())).remove(path, container)
    }

    /// List every leaf of `container` under its path, joined with this
    /// accessor's separator.
    #[must_use]
    pub fn flatten(&self, container: &Container) -> BTreeMap<String, Value> {
        flatten(container, &self.options.separator)
    }

    fn clear_key(&self, map: &mut Container, key: &str) {
        match self.options.remove_mode {
            RemoveMode::Nullify => {
                if let Some(val) = map.get_mut(key)
                    && !val.is_null()
                {
                    *val = Value::Null;
                }
            },
            RemoveMode::Delete => {
                map.remove(key);
            },
        }
    }

    /// Swap the value at an existing `path` for `value` without merging.
    fn replace(&self, path: &str, value: Value, container: &Container) -> Container {
        let segments = self.options.separator.split(path);
        let mut updated = container.clone();
        if let Some(slot) = get_nested_mut(&mut updated, &segments) {
            *slot = value;
        }
        updated
    }
}
