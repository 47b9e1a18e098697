//! Operations on a locale's message tree.
//!
//! A tree is a `serde_json::Value` whose object nodes are namespaces and
//! whose string leaves are message templates.

use std::collections::HashMap;

use serde_json::Value;

/// Resolve a separator-delimited key path to a string leaf.
///
/// Descends one segment at a time; every intermediate node must be an
/// object and the final node must be a string. Any other shape (missing
/// segment, non-object intermediate, non-string leaf) is a miss.
#[must_use]
pub(crate) fn lookup<'tree>(root: &'tree Value, key: &str, separator: &str) -> Option<&'tree str> {
    let mut node = root;
    for segment in key.split(separator) {
        node = node.as_object()?.get(segment)?;
    }
    node.as_str()
}

/// Flatten a message tree into a dot-separated key map.
///
/// Only string leaves are collected; non-string leaves do not resolve at
/// runtime and are skipped here too, so the flattened view matches what the
/// resolver can actually reach.
#[must_use]
pub(crate) fn flatten(root: &Value, separator: &str) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_into(root, separator, None, &mut result);
    result
}

/// Recursive worker for [`flatten`].
fn flatten_into(
    node: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match node {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_into(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        _ => {}
    }
}

/// Deep-merge `incoming` into `target`.
///
/// Object nodes merge key by key; anything else is replaced, so a later
/// catalog file wins over an earlier one on leaf conflicts.
pub(crate) fn merge(target: &mut Value, incoming: Value) {
    match (&mut *target, incoming) {
        (Value::Object(target_map), Value::Object(incoming_map)) => {
            for (key, value) in incoming_map {
                match target_map.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        target_map.insert(key, value);
                    }
                }
            }
        }
        (_, incoming) => *target = incoming,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[googletest::test]
    fn lookup_descends_nested_namespaces() {
        let tree = json!({
            "crossRef": {
                "title": "Cross Reference",
                "filters": { "inStock": "In stock only" }
            }
        });

        expect_that!(lookup(&tree, "crossRef.title", "."), some(eq("Cross Reference")));
        expect_that!(lookup(&tree, "crossRef.filters.inStock", "."), some(eq("In stock only")));
    }

    #[rstest]
    #[case::missing_segment("crossRef.subtitle")]
    #[case::too_deep("crossRef.title.more")]
    #[case::stops_on_namespace("crossRef")]
    #[case::stops_on_non_string("crossRef.weight")]
    #[case::empty_key("")]
    #[case::top_level_miss("reasoning.title")]
    fn lookup_misses_return_none(#[case] key: &str) {
        let tree = json!({
            "crossRef": { "title": "Cross Reference", "weight": 3 }
        });

        assert_that!(lookup(&tree, key, "."), none());
    }

    #[googletest::test]
    fn lookup_honors_custom_separator() {
        let tree = json!({ "a": { "b": "leaf" } });

        expect_that!(lookup(&tree, "a/b", "/"), some(eq("leaf")));
        expect_that!(lookup(&tree, "a.b", "/"), none());
    }

    #[googletest::test]
    fn flatten_collects_string_leaves_only() {
        let tree = json!({
            "nav": { "search": "Search", "depth": { "bom": "BOM Analysis" } },
            "count": 5,
            "flag": true
        });

        let flat = flatten(&tree, ".");

        expect_that!(flat.get("nav.search"), some(eq(&"Search".to_string())));
        expect_that!(flat.get("nav.depth.bom"), some(eq(&"BOM Analysis".to_string())));
        expect_that!(flat.len(), eq(2));
    }

    #[googletest::test]
    fn merge_combines_disjoint_namespaces() {
        let mut target = json!({ "nav": { "search": "Search" } });

        merge(&mut target, json!({ "rfq": { "title": "RFQs" } }));

        expect_that!(lookup(&target, "nav.search", "."), some(eq("Search")));
        expect_that!(lookup(&target, "rfq.title", "."), some(eq("RFQs")));
    }

    #[googletest::test]
    fn merge_lets_later_leaf_win() {
        let mut target = json!({ "nav": { "search": "Search" } });

        merge(&mut target, json!({ "nav": { "search": "Find parts" } }));

        expect_that!(lookup(&target, "nav.search", "."), some(eq("Find parts")));
    }

    #[googletest::test]
    fn merge_overwrites_non_object_target() {
        let mut target = json!("just a string");

        merge(&mut target, json!({ "nav": { "search": "Search" } }));

        expect_that!(lookup(&target, "nav.search", "."), some(eq("Search")));
    }
}
