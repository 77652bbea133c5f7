//! Deep merge of JSON values.
//!
//! Objects are merged field-by-field with overlay values taking precedence.
//! Arrays meeting at the same path are combined per an explicit policy;
//! every other pairing is resolved by the overlay replacing the base.

use serde_json::Value;
use serde_json::map::Entry;

/// How two arrays meeting at the same path are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayPolicy {
    /// The overlay array replaces the base array outright.
    #[default]
    Replace,
    /// Base elements first, then overlay elements appended.
    Concat,
    /// Elements are merged pairwise by index; the longer array's tail is kept.
    IndexMerge,
}

/// Deep merge two JSON values, with `overlay` taking precedence over `base`.
///
/// - Objects are merged recursively: keys in overlay override keys in base
/// - Array pairs are combined according to `arrays`
/// - Any other pairing is replaced by the overlay value, nulls included
///
/// Result keys keep the base document's order; keys found only in the
/// overlay are appended in the overlay's order.
///
/// # Example
/// ```
/// use serde_json::json;
/// use json_merge::merge::{ArrayPolicy, deep_merge};
///
/// let base = json!({
///     "server": { "port": 8080, "host": "localhost" },
///     "features": ["a", "b"]
/// });
/// let overlay = json!({
///     "server": { "port": 9000 },
///     "features": ["c"]
/// });
/// let result = deep_merge(base, overlay, ArrayPolicy::Replace);
/// assert_eq!(
///     result,
///     json!({
///         "server": { "port": 9000, "host": "localhost" },
///         "features": ["c"]
///     })
/// );
/// ```
pub fn deep_merge(base: Value, overlay: Value, arrays: ArrayPolicy) -> Value {
    match (base, overlay) {
        // Both are objects: merge recursively
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.entry(key) {
                    // Occupied entries recurse in place so shared keys keep
                    // their position in the base ordering
                    Entry::Occupied(mut entry) => {
                        let base_value = entry.get_mut().take();
                        entry.insert(deep_merge(base_value, overlay_value, arrays));
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(overlay_value);
                    }
                }
            }
            Value::Object(base_map)
        }
        // Both are arrays: the policy decides
        (Value::Array(base_items), Value::Array(overlay_items)) => {
            merge_arrays(base_items, overlay_items, arrays)
        }
        // Any other case: overlay replaces base entirely
        (_, overlay) => overlay,
    }
}

fn merge_arrays(base: Vec<Value>, overlay: Vec<Value>, arrays: ArrayPolicy) -> Value {
    match arrays {
        ArrayPolicy::Replace => Value::Array(overlay),
        ArrayPolicy::Concat => {
            let mut items = base;
            items.extend(overlay);
            Value::Array(items)
        }
        ArrayPolicy::IndexMerge => {
            let mut items = Vec::with_capacity(base.len().max(overlay.len()));
            let mut overlay_items = overlay.into_iter();
            for base_item in base {
                match overlay_items.next() {
                    Some(overlay_item) => {
                        items.push(deep_merge(base_item, overlay_item, arrays));
                    }
                    None => items.push(base_item),
                }
            }
            items.extend(overlay_items);
            Value::Array(items)
        }
    }
}
