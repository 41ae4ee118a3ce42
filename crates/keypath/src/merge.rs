//! Recursive deep merge of JSON object trees.
//!
//! `set` never writes into the caller's container. It builds a skeleton
//! holding only the new value and merges that into a copy, so every sibling
//! key at every depth survives.

use serde_json::Value;

use crate::Container;

/// Recursively deep-merge `overlay` into `base`.
///
/// - Objects merge recursively per key.
/// - Anything else from the overlay (scalars, arrays, `null`) **replaces**
///   the base value, including a whole subtree.
pub fn deep_merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            merge_into(base_map, overlay_map);
        },
        (base, overlay) => {
            *base = overlay.clone();
        },
    }
}

/// Deep-merge the keys of `overlay` into `base`.
///
/// Keys only in `base` are left untouched; keys only in `overlay` are added.
pub fn merge_into(base: &mut Container, overlay: &Container) {
    for (key, overlay_val) in overlay {
        if let Some(base_val) = base.get_mut(key) {
            deep_merge(base_val, overlay_val);
        } else {
            base.insert(key.clone(), overlay_val.clone());
        }
    }
}

/// Return a merged copy of `base` with `overlay` applied.
#[must_use]
pub fn merge_containers(base: &Container, overlay: &Container) -> Container {
    let mut merged = base.clone();
    merge_into(&mut merged, overlay);
    merged
}
