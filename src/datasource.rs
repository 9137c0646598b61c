//! Defines the capability abstraction over indexable container values.

/// The universal contract for a value the traversal engine can descend into
/// by string access key.
///
/// The engine is written exclusively against this trait, allowing it to walk
/// any nested representation (JSON values, config trees, etc.) that
/// implements it. Keys are always strings at this layer; whether a key is
/// interpreted as a mapping key or a sequence index is up to the adapter.
pub trait PathTarget {
    /// Looks up `key` in this value, yielding the child value if present.
    ///
    /// Returns `None` for scalar values, for mappings that lack the key, and
    /// for sequences when the key is not a valid in-bounds index.
    fn get_key(&self, key: &str) -> Option<&Self>;
}

impl PathTarget for serde_json::Value {
    fn get_key(&self, key: &str) -> Option<&Self> {
        match self {
            serde_json::Value::Object(map) => map.get(key),
            serde_json::Value::Array(items) => {
                key.parse::<usize>().ok().and_then(|index| items.get(index))
            }
            _ => None,
        }
    }
}
