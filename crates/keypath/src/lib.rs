#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Get, set and remove values in nested containers by delimited key path.
//!
//! A container is a JSON object tree. A path such as `"model.pricing.input"`
//! is split on a separator (`.` unless configured otherwise) and each segment
//! selects a key one level deeper.
//!
//! # Usage
//!
//! ```rust
//! use keypath::{Container, NestedAccessor};
//! use serde_json::json;
//!
//! let serde_json::Value::Object(config) = json!({"model": {"provider": "claude"}}) else {
//!     unreachable!()
//! };
//!
//! let updated = keypath::set("model.max_tokens", 8192, &config);
//! assert_eq!(keypath::get("model.max_tokens", &updated), Some(&json!(8192)));
//! assert_eq!(keypath::get("model.provider", &updated), Some(&json!("claude")));
//!
//! let cleared = keypath::remove("model.provider", &updated);
//! assert_eq!(cleared["model"]["provider"], serde_json::Value::Null);
//!
//! let slashed = NestedAccessor::with_separator("/").unwrap();
//! assert_eq!(slashed.get("model/max_tokens", &updated), Some(&json!(8192)));
//! # let _: Container = cleared;
//! ```
//!
//! # Semantics
//!
//! - Lookups return `None` for missing paths *and* stored `null` values;
//!   [`NestedAccessor::get_entry`] keeps them apart.
//! - `set` and `remove` never modify their input. They return an updated
//!   copy built by deep-merging the changed branch into the original.
//! - `remove` nulls the target by default rather than deleting it. See
//!   [`AccessorOptions`] for deletion and the other remove policies.

/// Path-keyed get, set and remove.
pub mod accessor;
/// Error types.
pub mod error;
/// Leaf listing by joined path.
pub mod flatten;
/// Recursive deep merge of object trees.
pub mod merge;
/// Accessor options and TOML loading.
pub mod options;
/// Separators and low-level traversal.
pub mod path;

pub use accessor::NestedAccessor;
pub use error::{KeypathError, KeypathResult};
pub use merge::{deep_merge, merge_containers};
pub use options::{AccessorOptions, ParentJoin, RemoveMode, RootRemove};
pub use path::{DEFAULT_SEPARATOR, Separator};

use serde_json::Value;

/// A nested key-value container. Object values are nested containers;
/// every other value is a leaf.
pub type Container = serde_json::Map<String, Value>;

/// Look up the value at a `.`-separated `path`.
///
/// See [`NestedAccessor::get`].
#[must_use]
pub fn get<'a>(path: &str, container: &'a Container) -> Option<&'a Value> {
    NestedAccessor::default().get(path, container)
}

/// Return a copy of `container` with `value` stored at a `.`-separated
/// `path`.
///
/// See [`NestedAccessor::set`].
#[must_use]
pub fn set(path: &str, value: impl Into<Value>, container: &Container) -> Container {
    NestedAccessor::default().set(path, value, container)
}

/// Return a copy of `container` with the value at a `.`-separated `path`
/// set to `null`.
///
/// See [`NestedAccessor::remove`].
#[must_use]
pub fn remove(path: &str, container: &Container) -> Container {
    NestedAccessor::default().remove(path, container)
}
