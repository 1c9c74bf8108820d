//! Dotted-path access into nested JSON documents.
//!
//! A dotted path such as `"skin.tone"` names a location in a tree of nested
//! mappings, one segment per `.`-delimited component. This module provides
//! the two pure functions everything else is built on:
//!
//! - [`set_deep`] - merge a value into a tree at a path, returning a new
//!   tree; the input and everything reachable through it are left untouched
//! - [`pick`] - read the value at a path, returning `None` the moment any
//!   segment is missing or an intermediate value is not a mapping
//!
//! Neither function has an error path. A non-mapping value sitting on the
//! write spine is silently replaced by a mapping; the schema registry's
//! no-prefix-collision invariant keeps schema-driven writes from ever
//! hitting that case.

use serde_json::{Map, Value};

/// An explicit list of path segments, parsed once from a dotted string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DottedPath {
    segments: Vec<String>,
}

impl DottedPath {
    /// Parse a dotted string into its segments.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    /// The path's segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl From<&str> for DottedPath {
    fn from(path: &str) -> Self {
        DottedPath::parse(path)
    }
}

/// Return a new tree equal to `tree` except that `path` now holds `value`.
///
/// For every segment but the last, the existing value at that segment is
/// shallow-copied if it is already a mapping, or replaced with a fresh empty
/// mapping otherwise. The final segment is set to `value`. The input tree is
/// never modified.
pub fn set_deep(tree: &Value, path: &DottedPath, value: Value) -> Value {
    set_at(tree, path.segments(), value)
}

fn set_at(tree: &Value, segments: &[String], value: Value) -> Value {
    let Some((head, rest)) = segments.split_first() else {
        return value;
    };

    let mut map = match tree {
        Value::Object(m) => m.clone(),
        _ => Map::new(),
    };
    let child = map.get(head).cloned().unwrap_or(Value::Null);
    map.insert(head.clone(), set_at(&child, rest, value));
    Value::Object(map)
}

/// Read the value at `path`, or `None` if any segment is absent or an
/// intermediate value is not a mapping. Never panics.
pub fn pick<'a>(tree: &'a Value, path: &DottedPath) -> Option<&'a Value> {
    let mut cur = tree;
    for segment in path.segments() {
        cur = cur.as_object()?.get(segment)?;
    }
    Some(cur)
}

/// Convenience wrapper for reading at a literal dotted string.
pub fn pick_str<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    pick(tree, &DottedPath::parse(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_splits_on_dots() {
        let path = DottedPath::parse("hair.head.color");
        assert_eq!(path.segments(), ["hair", "head", "color"]);
    }

    #[test]
    fn parse_single_segment() {
        let path = DottedPath::parse("subject");
        assert_eq!(path.segments(), ["subject"]);
    }

    #[test]
    fn set_then_pick_round_trips() {
        let tree = set_deep(&json!({}), &"skin.tone".into(), json!("medium"));
        assert_eq!(pick_str(&tree, "skin.tone"), Some(&json!("medium")));
    }

    #[test]
    fn set_deep_builds_intermediate_mappings() {
        let tree = set_deep(&json!({}), &"a.b.c.d".into(), json!(1));
        assert_eq!(tree, json!({"a": {"b": {"c": {"d": 1}}}}));
    }

    #[test]
    fn set_deep_preserves_sibling_branches() {
        let base = json!({"skin": {"tone": "fair"}, "hair": {"head": {"color": "red"}}});
        let tree = set_deep(&base, &"skin.pores".into(), json!("visible"));

        assert_eq!(pick_str(&tree, "skin.tone"), Some(&json!("fair")));
        assert_eq!(pick_str(&tree, "skin.pores"), Some(&json!("visible")));
        assert_eq!(pick_str(&tree, "hair.head.color"), Some(&json!("red")));
    }

    #[test]
    fn set_deep_does_not_modify_input() {
        let base = json!({"a": {"b": 1}});
        let _ = set_deep(&base, &"a.c".into(), json!(2));
        assert_eq!(base, json!({"a": {"b": 1}}));
    }

    #[test]
    fn set_deep_overwrites_existing_leaf() {
        let base = json!({"eyes": {"color": "brown"}});
        let tree = set_deep(&base, &"eyes.color".into(), json!("green"));
        assert_eq!(pick_str(&tree, "eyes.color"), Some(&json!("green")));
    }

    #[test]
    fn non_mapping_on_spine_is_replaced() {
        // "a" holds a scalar; writing under it replaces the scalar with a mapping.
        let base = json!({"a": 7});
        let tree = set_deep(&base, &"a.b".into(), json!(1));
        assert_eq!(tree, json!({"a": {"b": 1}}));
    }

    #[test]
    fn pick_missing_segment_is_none() {
        let tree = json!({"subject": {"age": 35}});
        assert_eq!(pick_str(&tree, "subject.height"), None);
        assert_eq!(pick_str(&tree, "body.height_cm"), None);
    }

    #[test]
    fn pick_through_non_mapping_is_none() {
        let tree = json!({"subject": {"age": 35}});
        assert_eq!(pick_str(&tree, "subject.age.years"), None);
    }

    #[test]
    fn pick_returns_intermediate_mapping() {
        let tree = json!({"anatomy": {"micro": {"neck_crease_1": "moderate"}}});
        let micro = pick_str(&tree, "anatomy.micro").unwrap();
        assert!(micro.is_object());
    }

    #[test]
    fn unrelated_path_unchanged_after_write() {
        let base = json!({"camera": {"lens": "50mm"}, "lighting": {"style": "softbox"}});
        let tree = set_deep(&base, &"camera.aperture".into(), json!("f/2.8"));
        assert_eq!(
            pick_str(&tree, "lighting.style"),
            pick_str(&base, "lighting.style")
        );
    }
}
