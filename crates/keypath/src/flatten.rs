//! Listing the leaves of a container by joined key path.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::Container;
use crate::path::Separator;

/// List every leaf of `container` under its joined key path.
///
/// Empty objects count as leaves so that every key present in the tree
/// shows up in the result.
#[must_use]
pub fn flatten(container: &Container, separator: &Separator) -> BTreeMap<String, Value> {
    let mut leaves = BTreeMap::new();
    for (key, child) in container {
        record_leaves(child, key, separator, &mut leaves);
    }
    leaves
}

/// Walk a value tree and record all leaf paths.
fn record_leaves(
    val: &Value,
    prefix: &str,
    separator: &Separator,
    leaves: &mut BTreeMap<String, Value>,
) {
    match val {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let path = format!("{prefix}{separator}{key}");
                record_leaves(child, &path, separator, leaves);
            }
        },
        _ => {
            leaves.insert(prefix.to_owned(), val.clone());
        },
    }
}
