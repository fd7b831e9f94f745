//! Recursive deep merge of mapping values.
//!
//! Writing `a/b/c` is implemented as merging `{b: {c: value}}` into whatever
//! is already stored under `a`.  The merge walks both mappings together:
//!
//! ```text
//! old:  {b: {c: 1, d: 2}, e: 3}
//! new:  {b: {c: 9}}
//! out:  {b: {c: 9, d: 2}, e: 3}
//! ```
//!
//! Where both sides hold a mapping the merge recurses; anywhere else the new
//! value wins outright.  Keys that only exist in the old mapping are kept in
//! their original position.

use serde_yaml::{Mapping, Value};

/// Merges `new` into a copy of `old`, leaving both inputs untouched.
pub fn deep_merge(old: &Mapping, new: &Mapping) -> Mapping {
    let mut merged = old.clone();
    for (key, incoming) in new {
        let combined = match (merged.get(key), incoming) {
            (Some(Value::Mapping(existing)), Value::Mapping(incoming)) => {
                Value::Mapping(deep_merge(existing, incoming))
            }
            _ => incoming.clone(),
        };
        merged.insert(key.clone(), combined);
    }
    merged
}

/// Combines the value currently stored at a base key with an incoming one.
///
/// Two mappings are deep-merged; in every other case `incoming` replaces
/// `existing`.
pub fn merge_values(existing: Option<&Value>, incoming: Value) -> Value {
    match (existing, incoming) {
        (Some(Value::Mapping(old)), Value::Mapping(new)) => Value::Mapping(deep_merge(old, &new)),
        (_, incoming) => incoming,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(text: &str) -> Mapping {
        serde_yaml::from_str(text).expect("test YAML must parse as a mapping")
    }

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).expect("test YAML must parse")
    }

    #[test]
    fn test_deep_merge_keeps_siblings_of_nested_write() {
        // Arrange
        let old = mapping("{b: {c: 1}}");
        let new = mapping("{b: {d: 2}}");

        // Act
        let merged = deep_merge(&old, &new);

        // Assert
        assert_eq!(merged, mapping("{b: {c: 1, d: 2}}"));
    }

    #[test]
    fn test_deep_merge_new_scalar_wins_on_conflict() {
        let merged = deep_merge(&mapping("{b: {c: 1}}"), &mapping("{b: {c: 2}}"));
        assert_eq!(merged, mapping("{b: {c: 2}}"));
    }

    #[test]
    fn test_deep_merge_scalar_replaces_mapping_and_back() {
        // A scalar overwrites a whole subtree ...
        let merged = deep_merge(&mapping("{b: {c: 1, d: 2}}"), &mapping("{b: flat}"));
        assert_eq!(merged, mapping("{b: flat}"));

        // ... and a mapping overwrites a scalar.
        let merged = deep_merge(&mapping("{b: flat}"), &mapping("{b: {c: 1}}"));
        assert_eq!(merged, mapping("{b: {c: 1}}"));
    }

    #[test]
    fn test_deep_merge_does_not_mutate_inputs() {
        let old = mapping("{b: {c: 1}}");
        let new = mapping("{b: {d: 2}, e: 3}");
        let old_before = old.clone();
        let new_before = new.clone();

        let _ = deep_merge(&old, &new);

        assert_eq!(old, old_before);
        assert_eq!(new, new_before);
    }

    #[test]
    fn test_deep_merge_preserves_order_of_existing_keys() {
        let merged = deep_merge(&mapping("{x: 1, y: 2, z: 3}"), &mapping("{w: 0, y: 20}"));
        let keys: Vec<&str> = merged.keys().filter_map(Value::as_str).collect();
        assert_eq!(keys, vec!["x", "y", "z", "w"]);
    }

    #[test]
    fn test_deep_merge_is_idempotent() {
        let old = mapping("{b: {c: 1}}");
        let new = mapping("{b: {d: 2}}");
        let once = deep_merge(&old, &new);
        let twice = deep_merge(&once, &new);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_values_deep_merges_two_mappings() {
        let existing = yaml("{b: {c: 1}}");
        let merged = merge_values(Some(&existing), yaml("{b: {d: 2}}"));
        assert_eq!(merged, yaml("{b: {c: 1, d: 2}}"));
    }

    #[test]
    fn test_merge_values_incoming_replaces_non_mapping() {
        assert_eq!(merge_values(Some(&Value::from(1)), yaml("{a: 1}")), yaml("{a: 1}"));
        assert_eq!(merge_values(Some(&yaml("{a: 1}")), Value::from("x")), Value::from("x"));
        assert_eq!(merge_values(None, Value::from(true)), Value::from(true));
    }
}
