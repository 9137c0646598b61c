//! Traversal engine: walks a target structure along a tokenized key sequence.

use crate::datasource::PathTarget;
use crate::error::PathError;
use crate::parser;

/// A generic key/value carrier used to report traversal results uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue<K, V> {
    pub key: K,
    pub value: V,
}

/// The result of resolving a path down to its immediate parent container,
/// so a caller holding mutable access can perform an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentLookup<'a, T> {
    /// All keys but the last, paired with the container they resolve to.
    pub parent: KeyValue<Vec<String>, Option<&'a T>>,
    /// The final key, paired with the value it selects inside the parent.
    pub child: KeyValue<String, Option<&'a T>>,
}

/// Walks `target` along an already-tokenized key sequence.
///
/// `None` means no value exists at the path; a missing intermediate
/// container short-circuits the walk instead of failing. An empty key
/// returns the value reached so far (the self-reference).
///
/// The key sequence is expected to come from [`parse`](crate::parse); this
/// function performs no validation of its own.
pub fn traverse_by_keys<'a, T: PathTarget>(keys: &[String], target: &'a T) -> Option<&'a T> {
    let mut current = Some(target);
    for key in keys {
        if key.is_empty() {
            return current;
        }
        current = current?.get_key(key);
    }
    current
}

/// Parses `path` and walks `target` along it.
///
/// Missing data is reported as `Ok(None)`, never as an error; the only
/// failure mode is a malformed path.
pub fn traverse<'a, T: PathTarget>(path: &str, target: &'a T) -> Result<Option<&'a T>, PathError> {
    let keys = parser::parse(path)?;
    Ok(traverse_by_keys(&keys, target))
}

/// Resolves `path` down to its parent container and final key.
///
/// Fails with [`PathError::NoParent`] when the path is a self-reference,
/// since the structure itself has no parent to assign into. The child value
/// (and the parent itself) may still be `None` when the data is absent.
pub fn traverse_to_parent<'a, T: PathTarget>(
    path: &str,
    target: &'a T,
) -> Result<ParentLookup<'a, T>, PathError> {
    let keys = parser::parse(path)?;
    let Some((child_key, parent_keys)) = keys.split_last() else {
        return Err(PathError::NoParent { path: path.to_string() });
    };
    if keys[0].is_empty() {
        return Err(PathError::NoParent { path: path.to_string() });
    }

    let parent_value = traverse_by_keys(parent_keys, target);
    let child_value = parent_value.and_then(|parent| parent.get_key(child_key));
    log::trace!(
        "resolved parent of '{path}': parent present = {}, child present = {}",
        parent_value.is_some(),
        child_value.is_some()
    );

    Ok(ParentLookup {
        parent: KeyValue {
            key: parent_keys.to_vec(),
            value: parent_value,
        },
        child: KeyValue {
            key: child_key.clone(),
            value: child_value,
        },
    })
}
